//! Errors raised while assembling an automaton graph.

use thiserror::Error;

/// Errors that can occur when building an automaton graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Start state assigned twice: `{first}` and then `{second}`")]
    ConflictingStartState { first: String, second: String },
}
