//! Error types for the selector engine.
//!
//! Only parsing can fail. Tokenizing and selecting are total over every
//! line and every index, so the per-line path never returns an error.

use std::fmt;

/// Errors produced while turning expression text into a blend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression (or one of its segments) matches no grammar production.
    MalformedExpression {
        /// What the parser expected to find.
        message: String,
        /// The offending piece of the expression.
        segment: String,
        /// The full expression text as given.
        expression: String,
        /// Byte offset of the failure in `expression`.
        offset: usize,
    },
}

impl Error {
    /// Create a malformed-expression error at a byte offset.
    ///
    /// The offending segment is the comma-delimited piece starting at `offset`,
    /// or the whole expression when the failure is structural (bad brackets,
    /// missing `:` sections) and that piece is empty.
    pub fn malformed(expression: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(expression.len());
        let segment = expression[offset..]
            .split([',', '[', ']'])
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(expression);
        Self::MalformedExpression {
            message: message.into(),
            segment: segment.to_string(),
            expression: expression.to_string(),
            offset,
        }
    }

    /// The offending segment of the expression.
    pub fn segment(&self) -> &str {
        match self {
            Self::MalformedExpression { segment, .. } => segment,
        }
    }

    /// Byte offset of the failure in the expression.
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedExpression { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedExpression {
                message,
                segment,
                expression,
                offset,
            } => {
                let column = expression[..*offset].chars().count();
                write!(
                    f,
                    "malformed expression: {} in '{}'\n  {}\n  {}^",
                    message,
                    segment,
                    expression,
                    " ".repeat(column)
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
