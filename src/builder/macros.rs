//! Macros for literal automaton construction.

/// Build an [`AutomatonGraph`](crate::core::AutomatonGraph) from a literal
/// description. Labels are identifiers.
///
/// # Example
///
/// ```
/// use dfascope::automaton;
///
/// let graph = automaton! {
///     start: q0,
///     accepting: [q1],
///     transitions: [q0 => q1, q1 => q0],
/// };
///
/// assert!(!graph.is_language_finite());
/// ```
#[macro_export]
macro_rules! automaton {
    (
        start: $start:ident
        $(, accepting: [$($accepting:ident),* $(,)?])?
        $(, transitions: [$($from:ident => $to:ident),* $(,)?])?
        $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            .start(stringify!($start))
            $($(.accepting(stringify!($accepting)))*)?
            $($(.transition(stringify!($from), stringify!($to)))*)?
            .build()
            .expect("automaton! always supplies exactly one start state")
    };
}
