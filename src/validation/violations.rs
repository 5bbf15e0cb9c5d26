//! Violations and handling strategies.

use thiserror::Error;

/// Problems found when validating an automaton description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("{role} `{state}` is not in the declared set of states")]
    UndeclaredState { state: String, role: &'static str },

    #[error("symbol `{symbol}` used by a transition from `{from}` is not in the alphabet")]
    UndeclaredSymbol { symbol: String, from: String },

    #[error("state `{from}` has several transitions on `{symbol}` (to `{first}` and `{second}`)")]
    NondeterministicTransition {
        from: String,
        symbol: String,
        first: String,
        second: String,
    },

    #[error("transition d({from}, {symbol}) = {to} is listed more than once")]
    DuplicateTransition {
        from: String,
        symbol: String,
        to: String,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// What a loader does with a description that has violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStrategy {
    /// Refuse to build the automaton
    Abort,

    /// Log every violation as a warning and continue
    #[default]
    Warn,

    /// Continue silently
    Ignore,
}
