//! Fallback policy: deterministic generic names for failed pipelines

use tracing::warn;

use crate::policy::NamingPolicy;
use crate::sanitize::SanitizedName;

/// Which pipeline stage triggered the fallback.
///
/// The cause does not change the generated name; it is recorded in the logs
/// so degraded runs stay diagnosable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    /// Content extraction failed or produced nothing usable
    Extraction,
    /// The completion service failed, timed out, or returned nothing
    Service,
    /// The completion reduced to an empty string after normalization
    Sanitization,
}

impl FallbackCause {
    /// Short classification string for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extraction => "extraction",
            Self::Service => "service",
            Self::Sanitization => "sanitization",
        }
    }
}

/// Produce a deterministic, policy-compliant generic name.
///
/// The name is `<category><separator><extension>`, where the category comes
/// from a small static extension mapping (images map to "image", everything
/// else to "untitled") and a missing extension is rendered as "file".
/// Always succeeds; this is the terminal safety net.
pub fn fallback(extension: &str, cause: FallbackCause, policy: &NamingPolicy) -> SanitizedName {
    let ext = normalize_extension(extension);
    let category = generic_category(&ext);

    warn!(
        cause = cause.as_str(),
        extension = %ext,
        "falling back to generic name"
    );

    let mut name = format!("{category}{}{ext}", policy.separator);
    name.truncate(policy.max_length);
    SanitizedName::new_unchecked(name)
}

/// Lowercase the extension and drop anything outside the allowed set.
fn normalize_extension(extension: &str) -> String {
    let ext: String = extension
        .trim()
        .trim_start_matches('.')
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    if ext.is_empty() {
        "file".to_string()
    } else {
        ext
    }
}

fn generic_category(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" | "png" | "gif" | "svg" | "ico" => "image",
        _ => "untitled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> NamingPolicy {
        NamingPolicy::default()
    }

    #[test]
    fn test_documents_fall_back_to_untitled() {
        let name = fallback("pdf", FallbackCause::Extraction, &policy());
        assert_eq!(name.as_str(), "untitled_pdf");

        let name = fallback("xlsx", FallbackCause::Extraction, &policy());
        assert_eq!(name.as_str(), "untitled_xlsx");
    }

    #[test]
    fn test_images_fall_back_to_image_category() {
        let name = fallback("png", FallbackCause::Service, &policy());
        assert_eq!(name.as_str(), "image_png");
    }

    #[test]
    fn test_missing_extension() {
        let name = fallback("", FallbackCause::Sanitization, &policy());
        assert_eq!(name.as_str(), "untitled_file");
    }

    #[test]
    fn test_extension_is_normalized() {
        let name = fallback(".PDF", FallbackCause::Extraction, &policy());
        assert_eq!(name.as_str(), "untitled_pdf");

        let name = fallback("do cx!", FallbackCause::Extraction, &policy());
        assert_eq!(name.as_str(), "untitled_docx");
    }

    #[test]
    fn test_always_policy_compliant() {
        let p = policy();
        for ext in ["pdf", "xlsx", "png", "", "weird-ext!", "PPTX", "木"] {
            for cause in [
                FallbackCause::Extraction,
                FallbackCause::Service,
                FallbackCause::Sanitization,
            ] {
                let name = fallback(ext, cause, &p);
                assert!(!name.as_str().is_empty());
                assert!(name.as_str().len() <= p.max_length);
                assert!(name.as_str().chars().all(|c| p.is_allowed(c)));
            }
        }
    }

    #[test]
    fn test_respects_policy_separator() {
        let mut p = policy();
        p.separator = '-';
        let name = fallback("pdf", FallbackCause::Extraction, &p);
        assert_eq!(name.as_str(), "untitled-pdf");
    }
}
