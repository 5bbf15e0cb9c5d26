//! Loading pipeline: read, parse, validate, build.
//!
//! This is the imperative shell around the pure core. File access happens
//! here and nowhere else in the library.

use crate::builder::BuildError;
use crate::core::AutomatonGraph;
use crate::parser::{self, ParseError};
use crate::validation::{ValidationRules, Violation, ViolationStrategy};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort loading an automaton.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed automaton description: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid automaton: {0}")]
    Build(#[from] BuildError),

    #[error("automaton description failed validation with {} violation(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<Violation>),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse, validate and build an automaton from its text form.
///
/// Violations are handled according to the rules' [`ViolationStrategy`].
pub fn load_str(input: &str, rules: &ValidationRules) -> Result<AutomatonGraph, LoadError> {
    let description = parser::parse(input)?;
    debug!(
        "parsed {} declared state(s), {} symbol(s), {} transition(s)",
        description.states.len(),
        description.alphabet.len(),
        description.transitions.len()
    );

    let violations = rules.violations(&description);
    if !violations.is_empty() {
        match rules.violation_strategy() {
            ViolationStrategy::Abort => return Err(LoadError::Invalid(violations)),
            ViolationStrategy::Warn => {
                for violation in &violations {
                    warn!("{violation}");
                }
            }
            ViolationStrategy::Ignore => {}
        }
    }

    Ok(description.to_graph()?)
}

/// Read and load a text description from `path`.
pub fn load_file(path: &Path, rules: &ValidationRules) -> Result<AutomatonGraph, LoadError> {
    info!("loading automaton from {}", path.display());
    let input = read(path)?;
    load_str(&input, rules)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
