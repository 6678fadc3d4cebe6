//! Prompt assembly for name suggestions

use christen_domain::{ExtractedContent, NamingPolicy, SuggestionRequest};

/// Delimits the content block in the user segment
const CONTENT_DELIMITER: &str = "---";

/// Builds the suggestion request from the system prompt, the naming policy,
/// and the extracted content
pub struct PromptBuilder<'a> {
    system_prompt: &'a str,
    policy: &'a NamingPolicy,
    content: &'a ExtractedContent,
    file_name: &'a str,
    extension: &'a str,
    max_content_chars: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(
        system_prompt: &'a str,
        policy: &'a NamingPolicy,
        content: &'a ExtractedContent,
        file_name: &'a str,
        extension: &'a str,
        max_content_chars: usize,
    ) -> Self {
        Self {
            system_prompt,
            policy,
            content,
            file_name,
            extension,
            max_content_chars,
        }
    }

    /// Build the complete suggestion request
    pub fn build(&self) -> SuggestionRequest {
        let mut user = String::new();

        // 1. Naming policy: conventions, categories, constraints
        user.push_str(&self.policy.prompt_text());
        user.push_str("\n\n");

        // 2. The content, or the extraction-failed note
        match self.content {
            ExtractedContent::Text(content) => {
                user.push_str("File content (truncated):\n");
                user.push_str(CONTENT_DELIMITER);
                user.push('\n');
                user.push_str(truncate_chars(content.trim(), self.max_content_chars));
                user.push('\n');
                user.push_str(CONTENT_DELIMITER);
                user.push('\n');
            }
            ExtractedContent::Unavailable { reason } => {
                user.push_str(&format!(
                    "Content extraction failed ({reason}). Only the file's name is known:\n"
                ));
                user.push_str(&format!("File name: {}\n", self.file_name));
                user.push_str(&format!(
                    "Extension: {}\n\n",
                    if self.extension.is_empty() {
                        "none"
                    } else {
                        self.extension
                    }
                ));
                user.push_str(
                    "Propose a generic, policy-compliant name based on the file type alone.\n",
                );
            }
        }

        SuggestionRequest::new(self.system_prompt.trim(), user)
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
