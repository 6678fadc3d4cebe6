//! Filename sanitizer: normalize arbitrary text into a policy-compliant name

use std::fmt;

use thiserror::Error;

use crate::policy::NamingPolicy;

/// Extensions the model may echo back; a trailing `.ext` from this set is
/// stripped before normalization.
const KNOWN_EXTENSIONS: &[&str] = &[
    "txt", "md", "csv", "json", "yaml", "yml", "xml", "html", "htm", "css", "jpg", "jpeg", "png",
    "gif", "svg", "ico", "pdf", "docx", "xlsx", "pptx",
];

/// A filename proven to satisfy a [`NamingPolicy`].
///
/// Can only be produced by [`sanitize`] or by the fallback policy, so
/// holding one is proof of compliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedName(String);

impl SanitizedName {
    pub(crate) fn new_unchecked(name: String) -> Self {
        Self(name)
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitization failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    /// Nothing usable remained after normalization
    #[error("name is empty after normalization")]
    Empty,
}

/// Normalize arbitrary text into a policy-compliant filename string.
///
/// Steps:
/// - strip surrounding whitespace and quote characters,
/// - strip a trailing `.ext` when `ext` is a known file extension,
/// - map characters outside `[A-Za-z0-9_-]` to the policy separator and
///   collapse consecutive separators,
/// - lowercase when the policy says so,
/// - truncate to the policy maximum at a separator boundary where possible.
///
/// Pure and total: returns either a non-empty compliant name or
/// [`SanitizeError::Empty`]. Already-compliant input comes back unchanged.
pub fn sanitize(raw: &str, policy: &NamingPolicy) -> Result<SanitizedName, SanitizeError> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '`'));
    let stem = strip_known_extension(trimmed);

    // Map into the allowed set and collapse runs of `-`/`_`.
    let mut out = String::with_capacity(stem.len());
    let mut last_is_sep = false;
    for ch in stem.chars() {
        let mapped = if policy.is_allowed(ch) {
            ch
        } else {
            policy.separator
        };
        if mapped == '-' || mapped == '_' {
            if !last_is_sep && !out.is_empty() {
                out.push(mapped);
                last_is_sep = true;
            }
        } else {
            out.push(mapped);
            last_is_sep = false;
        }
    }

    if policy.lowercase {
        out.make_ascii_lowercase();
    }

    let out = truncate_at_boundary(&out, policy.max_length);
    let out = out.trim_matches(|c| c == '-' || c == '_');

    if out.is_empty() {
        return Err(SanitizeError::Empty);
    }
    Ok(SanitizedName(out.to_string()))
}

/// Strip a trailing `.ext` if the model echoed a known file extension.
fn strip_known_extension(name: &str) -> &str {
    if let Some((stem, ext)) = name.rsplit_once('.') {
        if !stem.is_empty() && KNOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
            return stem;
        }
    }
    name
}

/// Truncate to `max` characters, backing up to the last separator when the
/// cut would land mid-token. The input is ASCII-only at this point.
fn truncate_at_boundary(name: &str, max: usize) -> &str {
    if name.len() <= max {
        return name;
    }
    let cut = &name[..max];
    // Cutting right before a separator already falls on a token edge.
    if matches!(name.as_bytes()[max], b'-' | b'_') {
        return cut;
    }
    match cut.rfind(['-', '_']) {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> NamingPolicy {
        NamingPolicy::default()
    }

    #[test]
    fn test_compliant_input_unchanged() {
        let name = sanitize("acme_corp_invoice_4521", &policy()).unwrap();
        assert_eq!(name.as_str(), "acme_corp_invoice_4521");

        let name = sanitize("quarterly-report-2024", &policy()).unwrap();
        assert_eq!(name.as_str(), "quarterly-report-2024");
    }

    #[test]
    fn test_lowercases_per_policy() {
        let name = sanitize("Acme_Corp_Invoice_4521", &policy()).unwrap();
        assert_eq!(name.as_str(), "acme_corp_invoice_4521");

        let mut keep_case = policy();
        keep_case.lowercase = false;
        let name = sanitize("Acme_Corp", &keep_case).unwrap();
        assert_eq!(name.as_str(), "Acme_Corp");
    }

    #[test]
    fn test_strips_quotes_and_whitespace_and_punctuation() {
        let name = sanitize("   \"Monthly Report Q1!!\"  ", &policy()).unwrap();
        assert_eq!(name.as_str(), "monthly_report_q1");
    }

    #[test]
    fn test_strips_echoed_extension() {
        let name = sanitize("invoice_march.pdf", &policy()).unwrap();
        assert_eq!(name.as_str(), "invoice_march");

        let name = sanitize("\"Invoice March.PDF\"", &policy()).unwrap();
        assert_eq!(name.as_str(), "invoice_march");
    }

    #[test]
    fn test_unknown_extension_kept_as_separator() {
        // ".backup" is not a known extension; the dot becomes a separator
        let name = sanitize("notes.backup", &policy()).unwrap();
        assert_eq!(name.as_str(), "notes_backup");
    }

    #[test]
    fn test_collapses_separator_runs() {
        // A mixed run of separators keeps only its first character
        let name = sanitize("a -- b__c", &policy()).unwrap();
        assert_eq!(name.as_str(), "a_b_c");

        let name = sanitize("draft    v2", &policy()).unwrap();
        assert_eq!(name.as_str(), "draft_v2");
    }

    #[test]
    fn test_hyphen_separator_policy() {
        let mut p = policy();
        p.separator = '-';
        let name = sanitize("Meeting Notes (final)", &p).unwrap();
        assert_eq!(name.as_str(), "meeting-notes-final");
    }

    #[test]
    fn test_empty_and_symbol_only_input_fail() {
        assert_eq!(sanitize("", &policy()), Err(SanitizeError::Empty));
        assert_eq!(sanitize("   ", &policy()), Err(SanitizeError::Empty));
        assert_eq!(sanitize("\"\"", &policy()), Err(SanitizeError::Empty));
        assert_eq!(sanitize("!!!###", &policy()), Err(SanitizeError::Empty));
    }

    #[test]
    fn test_truncates_at_separator_boundary() {
        let mut p = policy();
        p.max_length = 10;
        let name = sanitize("alpha_beta_gamma", &p).unwrap();
        assert_eq!(name.as_str(), "alpha_beta");

        // Cutting "alpha_bet|a_gamma" mid-token backs up to the separator
        p.max_length = 9;
        let name = sanitize("alpha_beta_gamma", &p).unwrap();
        assert_eq!(name.as_str(), "alpha");
    }

    #[test]
    fn test_truncates_hard_when_no_separator() {
        let mut p = policy();
        p.max_length = 8;
        let name = sanitize("abcdefghijkl", &p).unwrap();
        assert_eq!(name.as_str(), "abcdefgh");
    }

    #[test]
    fn test_output_always_within_policy() {
        let p = policy();
        let inputs = vec![
            "  A very, very long name: with (lots) of punctuation!!! ".to_string(),
            "résumé für müller.pdf".to_string(),
            "x".repeat(500),
            "---___---name---___---".to_string(),
        ];

        for input in &inputs {
            let name = sanitize(input, &p).unwrap();
            assert!(!name.as_str().is_empty());
            assert!(name.as_str().len() <= p.max_length);
            assert!(name.as_str().chars().all(|c| p.is_allowed(c)));
            // Idempotence: a compliant name survives a second pass unchanged
            let again = sanitize(name.as_str(), &p).unwrap();
            assert_eq!(again, name);
        }
    }

    #[test]
    fn test_non_ascii_replaced_not_transliterated() {
        let name = sanitize("café menu", &policy()).unwrap();
        assert_eq!(name.as_str(), "caf_menu");
    }
}
