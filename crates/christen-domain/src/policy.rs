//! Naming policy: the rules a suggested filename must satisfy

use serde::{Deserialize, Serialize};

/// The naming rules governing valid output names.
///
/// The structural constraints (separator, case, length) are enforced by the
/// sanitizer; the free-text `rules` and the `categories` list are rendered
/// into the prompt so the model aims for compliant names in the first place.
///
/// Immutable once loaded. The constraint fields deserialize from the CLI's
/// configuration file; the rules text is loaded separately from the
/// conventions document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingPolicy {
    /// Ordered category labels the conventions prefer (may be empty)
    #[serde(default)]
    pub categories: Vec<String>,

    /// Separator substituted for characters outside the allowed set
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Lowercase the final name
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Maximum name length in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Free-text convention rules, passed verbatim into the prompt
    #[serde(skip)]
    pub rules: String,
}

impl NamingPolicy {
    /// Attach the free-text convention rules loaded from the conventions
    /// document
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Whether a character may appear in a compliant name
    pub fn is_allowed(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
    }

    /// Render the policy as prompt text: convention rules, preferred
    /// categories, and the structural constraints
    pub fn prompt_text(&self) -> String {
        let mut text = String::new();

        let rules = self.rules.trim();
        if !rules.is_empty() {
            text.push_str(rules);
            text.push_str("\n\n");
        }

        if !self.categories.is_empty() {
            text.push_str("Preferred categories: ");
            text.push_str(&self.categories.join(", "));
            text.push_str("\n\n");
        }

        text.push_str(&format!(
            "Name constraints: ASCII letters and digits, '-' and '_' only; \
             at most {} characters{}.",
            self.max_length,
            if self.lowercase { "; all lowercase" } else { "" },
        ));

        text
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<(), String> {
        if self.max_length == 0 {
            return Err("max_length must be greater than 0".to_string());
        }
        if self.separator != '-' && self.separator != '_' {
            return Err(format!(
                "separator must be '-' or '_', got {:?}",
                self.separator
            ));
        }
        Ok(())
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            separator: default_separator(),
            lowercase: default_lowercase(),
            max_length: default_max_length(),
            rules: String::new(),
        }
    }
}

fn default_separator() -> char {
    '_'
}

fn default_lowercase() -> bool {
    true
}

fn default_max_length() -> usize {
    120
}
