//! Serializable bundle of every query result.

use super::graph::StateSet;
use super::state::State;
use serde::{Deserialize, Serialize};

/// Answers to all structural queries for one automaton.
///
/// Produced by [`AutomatonGraph::report`](super::AutomatonGraph::report).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The automaton's initial state
    pub start: State,

    /// Whether the start state is accepting
    pub accepts_empty_string: bool,

    /// States reachable from the start state
    pub accessible_states: StateSet,

    /// Accessible states that can reach an accepting state
    pub useful_states: StateSet,

    /// Whether no string is accepted
    pub language_empty: bool,

    /// Whether finitely many strings are accepted
    pub language_finite: bool,
}
