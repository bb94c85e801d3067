//! Error types for tokenreq
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::protocol::TokenType;

/// Result type alias using TokenError
pub type Result<T> = std::result::Result<T, TokenError>;

/// Unified error type for tokenreq operations
#[derive(Debug, Error)]
pub enum TokenError {
    // -------------------------------------------------------------------------
    // Wire Structure Errors
    // -------------------------------------------------------------------------
    #[error("Truncated input: {field} needs {expected} bytes, {available} available")]
    TruncatedInput {
        field: &'static str,
        expected: usize,
        available: usize,
    },

    #[error("Token type mismatch: expected {expected}, found 0x{found:04x}")]
    TypeMismatch { expected: TokenType, found: u16 },

    #[error("Unknown token type: 0x{0:04x}")]
    UnknownTokenType(u16),

    #[error("Empty variable-length field: {field}")]
    EmptyVariableField { field: &'static str },

    #[error("Trailing bytes: {remaining} unconsumed after last field")]
    TrailingBytes { remaining: usize },

    // -------------------------------------------------------------------------
    // Construction Errors
    // -------------------------------------------------------------------------
    #[error("Field too long: {field} is {len} bytes (max {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Unknown {kind} name: '{name}'")]
    UnknownName { kind: &'static str, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Test vector error: {0}")]
    Vectors(String),
}

impl TokenError {
    /// True for failures that describe malformed wire input.
    ///
    /// At the protocol boundary all of these collapse to a single
    /// "malformed" outcome.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            TokenError::TruncatedInput { .. }
                | TokenError::TypeMismatch { .. }
                | TokenError::UnknownTokenType(_)
                | TokenError::EmptyVariableField { .. }
                | TokenError::TrailingBytes { .. }
        )
    }
}
