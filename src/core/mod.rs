//! Core automaton model and structural queries.
//!
//! This module contains the pure part of the crate:
//! - `State` labels
//! - `AutomatonGraph`, the frozen transition graph, and its queries
//! - `AnalysisReport`, every query answer in one serializable value
//!
//! Nothing here performs I/O; the graph is built once and then only read.

mod analysis;
mod graph;
mod state;

pub use analysis::AnalysisReport;
pub use graph::{AutomatonGraph, StateSet};
pub use state::State;

pub(crate) use graph::Adjacency;
