//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, StructureError, SuggestionError};

/// This is the foundation error enum for the Arclight workspace.
///
/// # Examples
///
/// ```
/// use arclight_error::{ArclightError, ConfigError};
///
/// let cfg_err = ConfigError::new("bad merge");
/// let err: ArclightError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ArclightErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Structure template error
    #[from(StructureError)]
    Structure(StructureError),
    /// Suggestion pass error
    #[from(SuggestionError)]
    Suggestion(SuggestionError),
}

/// Arclight error with kind discrimination.
///
/// # Examples
///
/// ```
/// use arclight_error::{ArclightResult, StructureError, StructureErrorKind};
///
/// fn might_fail() -> ArclightResult<()> {
///     Err(StructureError::new(StructureErrorKind::EmptyStructure("blank".into())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Arclight Error: {}", _0)]
pub struct ArclightError(Box<ArclightErrorKind>);

impl ArclightError {
    /// Create a new error from a kind.
    pub fn new(kind: ArclightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ArclightErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ArclightErrorKind
impl<T> From<T> for ArclightError
where
    T: Into<ArclightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Arclight operations.
pub type ArclightResult<T> = std::result::Result<T, ArclightError>;
