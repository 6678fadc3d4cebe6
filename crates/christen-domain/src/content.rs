//! Result of content extraction for a single file

/// What content extraction produced for a file.
///
/// Produced by the extractor adapter and consumed once by the prompt
/// assembler. Extraction never errors: any failure is reported as
/// [`ExtractedContent::Unavailable`] with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedContent {
    /// Textual content or description of the file
    Text(String),

    /// Content could not be extracted
    Unavailable {
        /// Why extraction failed (corrupt file, unsupported format, ...)
        reason: String,
    },
}

impl ExtractedContent {
    /// Shorthand for the unavailable variant
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether extraction produced usable content
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}
