//! Parsed automaton description.

use crate::builder::{AutomatonBuilder, BuildError};
use crate::core::{AutomatonGraph, State};
use serde::{Deserialize, Serialize};

/// One `d(from, symbol) = to` entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRule {
    pub from: State,
    pub symbol: String,
    pub to: State,
}

impl TransitionRule {
    pub fn new(from: impl Into<State>, symbol: impl Into<String>, to: impl Into<State>) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

/// Everything the text format declares, in source order.
///
/// Unlike [`AutomatonGraph`], a description keeps the declared state set,
/// the alphabet and transition symbols, so it can be validated before the
/// structural graph is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDescription {
    /// Declared states (may be empty)
    pub states: Vec<State>,

    /// Declared input symbols (may be empty)
    pub alphabet: Vec<String>,

    /// Transitions in the order they were listed
    pub transitions: Vec<TransitionRule>,

    /// Initial state
    pub start: State,

    /// Accepting states
    pub accepting: Vec<State>,
}

impl AutomatonDescription {
    /// Feed the description into a fresh builder.
    pub fn builder(&self) -> AutomatonBuilder {
        AutomatonBuilder::new()
            .start(&self.start)
            .accepting_states(&self.accepting)
            .transitions(self.transitions.iter().map(|rule| (&rule.from, &rule.to)))
    }

    /// Build the structural graph. Transition symbols are dropped.
    pub fn to_graph(&self) -> Result<AutomatonGraph, BuildError> {
        self.builder().build()
    }
}
