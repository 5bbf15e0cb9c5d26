//! Builder API for automaton graph construction.
//!
//! The text parser and the tests both go through
//! [`AutomatonBuilder`], which is the only way to obtain an
//! [`AutomatonGraph`](crate::core::AutomatonGraph).

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
