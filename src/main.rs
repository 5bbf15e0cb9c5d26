//! Command-line front end.
//!
//! Usage:
//!   dfascope -e|-a|-u|-v|-f|-r [--input FILE] [--json] [--strict]
//!
//! The automaton is read from `dfa` in the working directory unless
//! `--input` says otherwise. Exactly one mode flag must be given.

use anyhow::{Context, Result};
use clap::{Args, Parser};
use dfascope::dispatch::{self, Mode};
use dfascope::loader;
use dfascope::validation::{ValidationRules, ViolationStrategy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dfascope", version)]
#[command(about = "Answer structural questions about a deterministic finite automaton")]
struct Cli {
    #[command(flatten)]
    mode: ModeFlags,

    /// Automaton description to analyze
    #[arg(short, long, value_name = "FILE", default_value = "dfa")]
    input: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Fail when the description has validation violations
    #[arg(long)]
    strict: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ModeFlags {
    /// Does the automaton accept the empty string?
    #[arg(short = 'e', long = "empty-string")]
    empty_string: bool,

    /// List the accessible states
    #[arg(short = 'a', long)]
    accessible: bool,

    /// List the useful states
    #[arg(short = 'u', long)]
    useful: bool,

    /// Is the language empty?
    #[arg(short = 'v', long = "void")]
    void: bool,

    /// Is the language finite?
    #[arg(short = 'f', long)]
    finite: bool,

    /// Print every answer
    #[arg(short = 'r', long)]
    report: bool,
}

impl ModeFlags {
    fn mode(&self) -> Mode {
        match self {
            Self { empty_string: true, .. } => Mode::EmptyString,
            Self { accessible: true, .. } => Mode::Accessible,
            Self { useful: true, .. } => Mode::Useful,
            Self { void: true, .. } => Mode::Void,
            Self { finite: true, .. } => Mode::Finite,
            // clap guarantees exactly one flag; `report` is the last one left.
            _ => Mode::Report,
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    init_logging();

    // Usage errors exit here, before any file is touched.
    let cli = Cli::parse();
    let mode = cli.mode.mode();

    let strategy = if cli.strict {
        ViolationStrategy::Abort
    } else {
        ViolationStrategy::Warn
    };
    let rules = ValidationRules::builder()
        .declared_states()
        .declared_symbols()
        .deterministic()
        .no_duplicates()
        .on_violation(strategy)
        .build();
    let graph = loader::load_file(&cli.input, &rules)
        .with_context(|| format!("could not load automaton from {}", cli.input.display()))?;

    let outcome = dispatch::run(&graph, mode);
    let rendered = if cli.json {
        dispatch::render_json(&outcome)?
    } else {
        dispatch::render_text(&outcome)
    };
    print!("{rendered}");

    Ok(())
}
