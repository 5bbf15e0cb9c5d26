//! State labels.
//!
//! A state carries no attributes beyond its identity. Two states are the same
//! node exactly when their labels are equal.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque label identifying a node of the automaton graph.
///
/// Labels are arbitrary strings. Equality, ordering and hashing all go
/// through the label, so a `State` can be looked up in maps keyed by `State`
/// using a plain `&str`.
///
/// # Example
///
/// ```rust
/// use dfascope::core::State;
///
/// let q0 = State::new("q0");
/// assert_eq!(q0.label(), "q0");
/// assert_eq!(q0, State::from("q0"));
/// assert_eq!(q0.to_string(), "q0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// Create a state from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label this state was created with.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for State {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for State {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&State> for State {
    fn from(state: &State) -> Self {
        state.clone()
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
