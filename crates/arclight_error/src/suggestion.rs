//! Suggestion pass error types.

/// Specific error conditions for suggestion and analysis passes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SuggestionErrorKind {
    /// The suggestion backend reported a failure
    #[display("Suggestion backend '{}' failed: {}", provider, message)]
    BackendFailure {
        /// Provider name given to the backend
        provider: String,
        /// Error message from the backend
        message: String,
    },
    /// The backend produced output the pass could not use
    #[display("Unusable backend response: {}", _0)]
    UnusableResponse(String),
}

/// Error type for suggestion and analysis operations.
///
/// These errors are recovered at the pass boundary: a failed pass reports a
/// notification and returns the original block list unchanged.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Suggestion Error: {} at line {} in {}", kind, line, file)]
pub struct SuggestionError {
    /// The specific error condition
    pub kind: SuggestionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SuggestionError {
    /// Create a new SuggestionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SuggestionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Convenience constructor for a backend failure.
    #[track_caller]
    pub fn backend(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(SuggestionErrorKind::BackendFailure {
            provider: provider.into(),
            message: message.into(),
        })
    }
}
