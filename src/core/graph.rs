//! The automaton's transition graph and its structural queries.
//!
//! Only reachability matters for the queries answered here, so the graph
//! keeps plain adjacency sets and drops transition symbols. Every traversal
//! is iterative with an explicit stack.

use super::analysis::AnalysisReport;
use super::state::State;
use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::iter::Flatten;
use std::option;

/// Set of states returned by the set-valued queries.
///
/// Ordered by label so that output is stable across runs. Callers should
/// still treat it as a set.
pub type StateSet = BTreeSet<State>;

pub(crate) type Adjacency = HashMap<State, HashSet<State>>;

type Neighbors<'a> = Flatten<option::IntoIter<&'a HashSet<State>>>;

/// Frozen transition graph of a deterministic finite automaton.
///
/// A graph can only be obtained from
/// [`AutomatonBuilder::build`](crate::builder::AutomatonBuilder::build), which
/// guarantees that a start state is present. After construction the graph is
/// read-only; every query is a pure function of it.
///
/// # Example
///
/// ```rust
/// use dfascope::builder::AutomatonBuilder;
///
/// let graph = AutomatonBuilder::new()
///     .start("A")
///     .accepting("B")
///     .transition("A", "B")
///     .transition("B", "A")
///     .build()
///     .unwrap();
///
/// assert!(!graph.accepts_empty_string());
/// assert_eq!(graph.useful_states().len(), 2);
/// assert!(!graph.is_language_empty());
/// assert!(!graph.is_language_finite());
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonGraph {
    start: State,
    accepting: HashSet<State>,
    forward: Adjacency,
    reverse: Adjacency,
}

impl AutomatonGraph {
    pub(crate) fn from_parts(
        start: State,
        accepting: HashSet<State>,
        forward: Adjacency,
        reverse: Adjacency,
    ) -> Self {
        Self {
            start,
            accepting,
            forward,
            reverse,
        }
    }

    /// The initial state.
    pub fn start(&self) -> &State {
        &self.start
    }

    /// Accepting states, in no particular order.
    pub fn accepting_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.accepting.iter()
    }

    /// Check whether `state` is accepting.
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting.contains(state)
    }

    /// States reachable from `state` through one transition.
    ///
    /// Unknown labels have no successors.
    pub fn successors<'a>(&'a self, state: &str) -> impl Iterator<Item = &'a State> + 'a {
        neighbors(&self.forward, state)
    }

    /// States with a transition into `state`.
    ///
    /// Unknown labels have no predecessors.
    pub fn predecessors<'a>(&'a self, state: &str) -> impl Iterator<Item = &'a State> + 'a {
        neighbors(&self.reverse, state)
    }

    /// Every transition as a `(source, target)` pair, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&State, &State)> + '_ {
        self.forward
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    /// Number of distinct `(source, target)` transitions.
    pub fn transition_count(&self) -> usize {
        self.forward.values().map(HashSet::len).sum()
    }

    /// Every label that appears in the graph: the start state, the accepting
    /// states and all transition endpoints.
    pub fn states(&self) -> StateSet {
        let mut states = StateSet::new();
        states.insert(self.start.clone());
        states.extend(self.accepting.iter().cloned());
        for (from, targets) in &self.forward {
            states.insert(from.clone());
            states.extend(targets.iter().cloned());
        }
        states
    }

    /// Check whether `state` appears anywhere in the graph.
    pub fn contains_state(&self, state: &str) -> bool {
        self.start.label() == state
            || self.accepting.contains(state)
            || self.forward.contains_key(state)
            || self.reverse.contains_key(state)
    }

    /// Returns true iff the start state is accepting.
    pub fn accepts_empty_string(&self) -> bool {
        self.accepting.contains(&self.start)
    }

    /// States reachable from the start state through zero or more
    /// transitions. Always contains the start state.
    pub fn accessible_states(&self) -> StateSet {
        collect(self.accessible())
    }

    /// States that are accessible and can reach an accepting state without
    /// leaving the accessible region.
    pub fn useful_states(&self) -> StateSet {
        let accessible = self.accessible();
        collect(self.useful(&accessible))
    }

    /// Returns true iff the automaton accepts no string at all.
    pub fn is_language_empty(&self) -> bool {
        let accessible = self.accessible();
        self.useful(&accessible).is_empty()
    }

    /// Returns true iff the accepted language is finite.
    ///
    /// The language is infinite exactly when some cycle passes through a
    /// useful state. Cycles among dead or inaccessible states do not count.
    pub fn is_language_finite(&self) -> bool {
        let accessible = self.accessible();
        let useful = self.useful(&accessible);
        if useful.is_empty() {
            return true;
        }
        !self.has_useful_cycle(&useful)
    }

    /// Run every query and bundle the answers.
    pub fn report(&self) -> AnalysisReport {
        let accessible = self.accessible();
        let useful = self.useful(&accessible);
        let language_empty = useful.is_empty();
        let language_finite = language_empty || !self.has_useful_cycle(&useful);

        AnalysisReport {
            start: self.start.clone(),
            accepts_empty_string: self.accepts_empty_string(),
            accessible_states: collect(accessible),
            useful_states: collect(useful),
            language_empty,
            language_finite,
        }
    }

    fn accessible(&self) -> HashSet<&State> {
        let mut visited = HashSet::new();
        let mut stack = vec![&self.start];
        visited.insert(&self.start);

        while let Some(state) = stack.pop() {
            for next in neighbors(&self.forward, state.label()) {
                // Marked on push so a state is never stacked twice.
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        debug!("{} state(s) accessible from {}", visited.len(), self.start);
        visited
    }

    fn useful<'a>(&'a self, accessible: &HashSet<&'a State>) -> HashSet<&'a State> {
        let mut visited: HashSet<&State> = HashSet::new();

        for seed in self.accepting.iter().filter(|s| accessible.contains(*s)) {
            if !visited.insert(seed) {
                continue;
            }
            let mut stack = vec![seed];
            while let Some(state) = stack.pop() {
                for prev in neighbors(&self.reverse, state.label()) {
                    if accessible.contains(prev) && visited.insert(prev) {
                        stack.push(prev);
                    }
                }
            }
        }

        debug!("{} useful state(s)", visited.len());
        visited
    }

    /// Depth-first search from the start state looking for a back edge whose
    /// target is useful and still on the active path.
    fn has_useful_cycle(&self, useful: &HashSet<&State>) -> bool {
        let mut visited: HashSet<&State> = HashSet::new();
        let mut on_path: HashSet<&State> = HashSet::new();
        let mut stack: Vec<(&State, Neighbors<'_>)> = Vec::new();

        visited.insert(&self.start);
        on_path.insert(&self.start);
        stack.push((&self.start, neighbors(&self.forward, self.start.label())));

        while let Some(frame) = stack.last_mut() {
            let state = frame.0;
            match frame.1.next() {
                Some(next) => {
                    if visited.insert(next) {
                        on_path.insert(next);
                        stack.push((next, neighbors(&self.forward, next.label())));
                    } else if useful.contains(next) && on_path.contains(next) {
                        debug!("back edge {} -> {} closes a useful cycle", state, next);
                        return true;
                    }
                }
                None => {
                    on_path.remove(state);
                    stack.pop();
                }
            }
        }

        false
    }
}

fn neighbors<'a>(adjacency: &'a Adjacency, state: &str) -> Neighbors<'a> {
    adjacency.get(state).into_iter().flatten()
}

fn collect(states: HashSet<&State>) -> StateSet {
    states.into_iter().cloned().collect()
}
