//! Structure template error types.

/// Specific error conditions for structure template operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StructureErrorKind {
    /// Failed to read a template file
    #[display("Failed to read structure template file: {}", _0)]
    FileRead(String),
    /// Failed to parse TOML content
    #[display("Failed to parse structure TOML: {}", _0)]
    TomlParse(String),
    /// Requested structure is not in the library
    #[display("Structure '{}' is not defined in the template library", _0)]
    UnknownStructure(String),
    /// A structure entry lists no acts
    #[display("Structure '{}' defines no acts", _0)]
    EmptyStructure(String),
}

/// Error type for structure template operations.
///
/// # Examples
///
/// ```
/// use arclight_error::{StructureError, StructureErrorKind};
///
/// let err = StructureError::new(StructureErrorKind::UnknownStructure("5-act".into()));
/// assert!(format!("{}", err).contains("5-act"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Structure Error: {} at line {} in {}", kind, line, file)]
pub struct StructureError {
    /// The specific error condition
    pub kind: StructureErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StructureError {
    /// Create a new StructureError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StructureErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
