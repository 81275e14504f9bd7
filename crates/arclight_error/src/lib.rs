//! Error types for the Arclight story-planning engine.
//!
//! This crate provides the foundation error types used throughout the Arclight
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use arclight_error::{ArclightResult, ConfigError};
//!
//! fn load_templates() -> ArclightResult<String> {
//!     Err(ConfigError::new("template file unreadable"))?
//! }
//!
//! match load_templates() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod structure;
mod suggestion;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{ArclightError, ArclightErrorKind, ArclightResult};
pub use structure::{StructureError, StructureErrorKind};
pub use suggestion::{SuggestionError, SuggestionErrorKind};
