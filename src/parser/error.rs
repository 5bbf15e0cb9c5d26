//! Parse errors for the automaton text format.

use std::fmt;
use thiserror::Error;

/// 1-based line and column of a token in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while parsing an automaton description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{position}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: Position,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("{position}: unexpected {found} after the closing `)`")]
    TrailingInput { found: String, position: Position },

    #[error("{position}: unrecognized input `{text}`")]
    UnrecognizedInput { text: String, position: Position },
}
