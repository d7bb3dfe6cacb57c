//! Engine error type.
//!
//! `tc-output` keeps its own error enum and wraps `TcError` as one variant.

use thiserror::Error;

/// The error type shared by `tc-core`, `tc-zones`, and `tc-matrix`.
#[derive(Debug, Error)]
pub enum TcError {
    /// Too few nodes, non-positive speed, malformed coordinates or zones.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A computation produced a non-finite value.
    #[error("numeric degenerate: {0}")]
    NumericDegenerate(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `tc-*` engine crates.
pub type TcResult<T> = Result<T, TcError>;
