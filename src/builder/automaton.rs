//! Builder for constructing automaton graphs.

use crate::builder::error::BuildError;
use crate::core::{Adjacency, AutomatonGraph, State};
use std::collections::HashSet;

/// Incremental, append-only builder for [`AutomatonGraph`].
///
/// This is the contract a loader drives: one start assignment, any number of
/// accepting states, any number of transitions. Each transition is recorded
/// in both the forward and the reverse adjacency, so the two always stay
/// transposes of each other.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    start: Option<State>,
    conflicting_start: Option<State>,
    accepting: HashSet<State>,
    forward: Adjacency,
    reverse: Adjacency,
}

impl AutomatonBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start state (required).
    ///
    /// Repeating the same label is harmless. A different label is remembered
    /// and reported by [`build`](Self::build).
    pub fn start(mut self, state: impl Into<State>) -> Self {
        let state = state.into();
        match &self.start {
            None => self.start = Some(state),
            Some(current) if *current == state => {}
            Some(_) => {
                self.conflicting_start.get_or_insert(state);
            }
        }
        self
    }

    /// Mark a state as accepting. Idempotent.
    pub fn accepting(mut self, state: impl Into<State>) -> Self {
        self.accepting.insert(state.into());
        self
    }

    /// Mark several states as accepting.
    pub fn accepting_states<I, T>(self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<State>,
    {
        states
            .into_iter()
            .fold(self, |builder, state| builder.accepting(state))
    }

    /// Add a transition from `from` to `to`. Duplicate edges collapse.
    pub fn transition(mut self, from: impl Into<State>, to: impl Into<State>) -> Self {
        let from = from.into();
        let to = to.into();
        self.reverse
            .entry(to.clone())
            .or_default()
            .insert(from.clone());
        self.forward.entry(from).or_default().insert(to);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I, A, B>(self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<State>,
        B: Into<State>,
    {
        transitions
            .into_iter()
            .fold(self, |builder, (from, to)| builder.transition(from, to))
    }

    /// Freeze the graph.
    /// Returns an error if no start state was given or if two different
    /// start states were assigned.
    pub fn build(self) -> Result<AutomatonGraph, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        if let Some(second) = self.conflicting_start {
            return Err(BuildError::ConflictingStartState {
                first: start.label().to_string(),
                second: second.label().to_string(),
            });
        }

        Ok(AutomatonGraph::from_parts(
            start,
            self.accepting,
            self.forward,
            self.reverse,
        ))
    }
}
