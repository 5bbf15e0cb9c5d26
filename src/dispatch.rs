//! Query dispatch and rendering.
//!
//! Exactly one [`Mode`] is run per invocation. The result is rendered either
//! as plain text (`Yes`/`No`, or one label per line) or as JSON.

use crate::core::{AnalysisReport, AutomatonGraph, StateSet};
use log::debug;
use serde::Serialize;
use std::fmt;

/// The query to run against an automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Does the automaton accept the empty string?
    EmptyString,
    /// List accessible states
    Accessible,
    /// List useful states
    Useful,
    /// Is the language empty?
    Void,
    /// Is the language finite?
    Finite,
    /// Every answer at once
    Report,
}

/// Result of running one [`Mode`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Answer(bool),
    States(StateSet),
    Report(AnalysisReport),
}

/// Run `mode` against `graph`.
pub fn run(graph: &AutomatonGraph, mode: Mode) -> QueryOutcome {
    debug!("running {mode:?} query");
    match mode {
        Mode::EmptyString => QueryOutcome::Answer(graph.accepts_empty_string()),
        Mode::Accessible => QueryOutcome::States(graph.accessible_states()),
        Mode::Useful => QueryOutcome::States(graph.useful_states()),
        Mode::Void => QueryOutcome::Answer(graph.is_language_empty()),
        Mode::Finite => QueryOutcome::Answer(graph.is_language_finite()),
        Mode::Report => QueryOutcome::Report(graph.report()),
    }
}

fn yes_no(answer: bool) -> &'static str {
    if answer {
        "Yes"
    } else {
        "No"
    }
}

fn write_states(f: &mut fmt::Formatter<'_>, states: &StateSet) -> fmt::Result {
    states.iter().try_for_each(|state| writeln!(f, "{state}"))
}

/// Plain-text form. Every line, including the last, ends in `\n`.
impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer(answer) => writeln!(f, "{}", yes_no(*answer)),
            Self::States(states) => write_states(f, states),
            Self::Report(report) => {
                writeln!(f, "start: {}", report.start)?;
                writeln!(
                    f,
                    "accepts empty string: {}",
                    yes_no(report.accepts_empty_string)
                )?;
                writeln!(f, "language empty: {}", yes_no(report.language_empty))?;
                writeln!(f, "language finite: {}", yes_no(report.language_finite))?;
                writeln!(f, "accessible states:")?;
                write_states(f, &report.accessible_states)?;
                writeln!(f, "useful states:")?;
                write_states(f, &report.useful_states)
            }
        }
    }
}

/// Plain-text rendering.
pub fn render_text(outcome: &QueryOutcome) -> String {
    outcome.to_string()
}

/// JSON rendering, pretty-printed with a trailing newline.
pub fn render_json(outcome: &QueryOutcome) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(outcome)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton;

    fn graph() -> AutomatonGraph {
        automaton! {
            start: A,
            accepting: [B],
            transitions: [A => B, B => A, A => C],
        }
    }

    #[test]
    fn boolean_modes_render_yes_or_no() {
        let graph = graph();

        assert_eq!(render_text(&run(&graph, Mode::EmptyString)), "No\n");
        assert_eq!(render_text(&run(&graph, Mode::Void)), "No\n");
        assert_eq!(render_text(&run(&graph, Mode::Finite)), "No\n");
    }

    #[test]
    fn set_modes_render_one_label_per_line() {
        let graph = graph();

        assert_eq!(render_text(&run(&graph, Mode::Accessible)), "A\nB\nC\n");
        assert_eq!(render_text(&run(&graph, Mode::Useful)), "A\nB\n");
    }

    #[test]
    fn empty_set_renders_nothing() {
        let graph = automaton! { start: A };
        assert_eq!(render_text(&run(&graph, Mode::Useful)), "");
        assert_eq!(render_text(&run(&graph, Mode::Void)), "Yes\n");
    }

    #[test]
    fn report_mode_renders_every_answer() {
        let text = render_text(&run(&graph(), Mode::Report));

        assert_eq!(
            text,
            "start: A\n\
             accepts empty string: No\n\
             language empty: No\n\
             language finite: No\n\
             accessible states:\n\
             A\nB\nC\n\
             useful states:\n\
             A\nB\n"
        );
    }

    #[test]
    fn display_matches_text_rendering() {
        let graph = graph();

        for mode in [Mode::EmptyString, Mode::Accessible, Mode::Report] {
            let outcome = run(&graph, mode);
            assert_eq!(format!("{outcome}"), render_text(&outcome));
        }
    }

    #[test]
    fn json_rendering_is_untagged() {
        let graph = graph();

        let answer = render_json(&run(&graph, Mode::Finite)).unwrap();
        assert_eq!(answer, "false\n");

        let states: Vec<String> =
            serde_json::from_str(&render_json(&run(&graph, Mode::Useful)).unwrap()).unwrap();
        assert_eq!(states, vec!["A", "B"]);

        let report: AnalysisReport =
            serde_json::from_str(&render_json(&run(&graph, Mode::Report)).unwrap()).unwrap();
        assert_eq!(report, graph.report());
    }
}
