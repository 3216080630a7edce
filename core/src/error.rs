//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Invalid generator configuration (options, merge directives).
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Config(String),

    /// Invalid source metadata handed to a converter.
    #[from(ignore)]
    #[display("Converter Error: {_0}")]
    Converter(String),

    /// A JSON or YAML document that could not be parsed.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
