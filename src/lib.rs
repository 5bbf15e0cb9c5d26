//! dfascope: structural analysis of deterministic finite automata
//!
//! dfascope answers questions about an automaton's transition graph that do
//! not depend on input symbols: whether the empty string is accepted, which
//! states are accessible, which are useful, and whether the accepted
//! language is empty or finite.
//!
//! # Core Concepts
//!
//! - **AutomatonGraph**: frozen forward and reverse adjacency plus start and
//!   accepting states, built once through `AutomatonBuilder`
//! - **Queries**: pure, iterative graph traversals over that graph
//! - **Loading**: text parsing and validation of the description
//!
//! # Example
//!
//! ```rust
//! use dfascope::dispatch::{self, Mode};
//! use dfascope::loader;
//! use dfascope::validation::ValidationRules;
//!
//! let text = "({A, B}, {x}, {d(A, x) = B, d(B, x) = B}, A, {B})";
//! let graph = loader::load_str(text, &ValidationRules::standard()).unwrap();
//!
//! let outcome = dispatch::run(&graph, Mode::Finite);
//! assert_eq!(dispatch::render_text(&outcome), "No\n");
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod loader;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, BuildError};
pub use crate::core::{AnalysisReport, AutomatonGraph, State, StateSet};
pub use crate::dispatch::{Mode, QueryOutcome};
pub use crate::loader::LoadError;
