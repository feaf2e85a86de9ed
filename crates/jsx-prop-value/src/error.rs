//! Error types for the parsing frontend
//!
//! Evaluation itself never fails; only turning source text into a syntax
//! tree can.

use thiserror::Error;

/// Error produced while parsing JSX source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source is not valid JSX
    #[error("Syntax error: {message}")]
    Syntax {
        /// Parser diagnostic
        message: String,
    },

    /// The source parsed, but not to a JSX element
    #[error("Expected a JSX element, found {kind}")]
    NotAnElement {
        /// Kind of expression that was found instead
        kind: String,
    },
}

/// Result type alias for frontend operations
pub type Result<T> = std::result::Result<T, ParseError>;
