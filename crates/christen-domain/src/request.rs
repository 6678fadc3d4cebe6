//! The assembled request sent to the completion service

/// A fully assembled suggestion request.
///
/// Built fresh per invocation by the prompt assembler and consumed once by
/// the completion provider. The system segment carries the operator's
/// instructions verbatim; the user segment carries the naming policy and
/// the (bounded) extracted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// System-role instructions
    pub system: String,

    /// User-role text: policy rules plus content block or failure note
    pub user: String,
}

impl SuggestionRequest {
    /// Create a new request from its two segments
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}
