//! Builder API for creating validation rules.

use crate::parser::AutomatonDescription;
use crate::validation::rules::{ValidationCheck, ValidationRules};
use crate::validation::violations::{Violation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating validation rules. Every built-in check starts
/// disabled.
pub struct ValidationBuilder {
    declared_states: bool,
    declared_symbols: bool,
    determinism: bool,
    duplicates: bool,
    required_checks: Vec<ValidationCheck>,
    on_violation: ViolationStrategy,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self {
            declared_states: false,
            declared_symbols: false,
            determinism: false,
            duplicates: false,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::default(),
        }
    }

    /// Require every referenced state to be declared
    pub fn declared_states(mut self) -> Self {
        self.declared_states = true;
        self
    }

    /// Require every transition symbol to be in the alphabet
    pub fn declared_symbols(mut self) -> Self {
        self.declared_symbols = true;
        self
    }

    /// Reject two transitions on the same `(state, symbol)` with different targets
    pub fn deterministic(mut self) -> Self {
        self.determinism = true;
        self
    }

    /// Reject repeated identical transitions
    pub fn no_duplicates(mut self) -> Self {
        self.duplicates = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&AutomatonDescription) -> Validation<(), NonEmptyVec<Violation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&AutomatonDescription) -> bool + Send + Sync + 'static,
    {
        let check = move |description: &AutomatonDescription| {
            if predicate(description) {
                Validation::success(())
            } else {
                Validation::fail(Violation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build the validation rules
    pub fn build(self) -> ValidationRules {
        ValidationRules {
            declared_states: self.declared_states,
            declared_symbols: self.declared_symbols,
            determinism: self.determinism,
            duplicates: self.duplicates,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for ValidationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
