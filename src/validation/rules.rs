//! Validation rules for automaton descriptions using Validation.

use crate::core::State;
use crate::parser::{AutomatonDescription, TransitionRule};
use crate::validation::builder::ValidationBuilder;
use crate::validation::violations::{Violation, ViolationStrategy};
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ValidationCheck = Box<
    dyn Fn(&AutomatonDescription) -> Validation<(), NonEmptyVec<Violation>> + Send + Sync,
>;

/// Validation rules for automaton descriptions.
/// Uses Validation to accumulate ALL violations.
pub struct ValidationRules {
    pub(crate) declared_states: bool,
    pub(crate) declared_symbols: bool,
    pub(crate) determinism: bool,
    pub(crate) duplicates: bool,
    pub(crate) required_checks: Vec<ValidationCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl ValidationRules {
    /// Start building a rule set with every check disabled.
    pub fn builder() -> ValidationBuilder {
        ValidationBuilder::new()
    }

    /// Every built-in check, warning on violations.
    pub fn standard() -> Self {
        ValidationBuilder::new()
            .declared_states()
            .declared_symbols()
            .deterministic()
            .no_duplicates()
            .build()
    }

    /// Validate a description, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn validate(
        &self,
        description: &AutomatonDescription,
    ) -> Validation<(), NonEmptyVec<Violation>> {
        let mut found = Vec::new();

        if self.declared_states {
            found.extend(undeclared_states(description));
        }
        if self.declared_symbols {
            found.extend(undeclared_symbols(description));
        }
        if self.determinism {
            found.extend(nondeterministic_transitions(description));
        }
        if self.duplicates {
            found.extend(duplicate_transitions(description));
        }

        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> = found
            .into_iter()
            .map(Validation::fail)
            .collect();

        // Run custom checks
        for check_fn in &self.required_checks {
            checks.push(check_fn(description));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and flatten the outcome into a plain list.
    pub fn violations(&self, description: &AutomatonDescription) -> Vec<Violation> {
        match self.validate(description) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Skipped when no states were declared.
fn undeclared_states(description: &AutomatonDescription) -> Vec<Violation> {
    if description.states.is_empty() {
        return Vec::new();
    }

    let declared: HashSet<&State> = description.states.iter().collect();
    let referenced = std::iter::once((&description.start, "start state"))
        .chain(description.accepting.iter().map(|s| (s, "accepting state")))
        .chain(description.transitions.iter().flat_map(|rule| {
            [(&rule.from, "transition source"), (&rule.to, "transition target")]
        }));

    let mut reported = HashSet::new();
    referenced
        .filter(|(state, _)| !declared.contains(*state))
        .filter(|&(state, role)| reported.insert((state, role)))
        .map(|(state, role)| Violation::UndeclaredState {
            state: state.to_string(),
            role,
        })
        .collect()
}

/// Skipped when the alphabet is empty.
fn undeclared_symbols(description: &AutomatonDescription) -> Vec<Violation> {
    if description.alphabet.is_empty() {
        return Vec::new();
    }

    let alphabet: HashSet<&str> = description.alphabet.iter().map(String::as_str).collect();
    let mut reported = HashSet::new();
    description
        .transitions
        .iter()
        .filter(|rule| !alphabet.contains(rule.symbol.as_str()))
        .filter(|rule| reported.insert((&rule.from, &rule.symbol)))
        .map(|rule| Violation::UndeclaredSymbol {
            symbol: rule.symbol.clone(),
            from: rule.from.to_string(),
        })
        .collect()
}

fn nondeterministic_transitions(description: &AutomatonDescription) -> Vec<Violation> {
    let mut targets: HashMap<(&State, &str), &State> = HashMap::new();
    let mut reported = HashSet::new();
    let mut violations = Vec::new();

    for rule in &description.transitions {
        let first = *targets
            .entry((&rule.from, rule.symbol.as_str()))
            .or_insert(&rule.to);
        if first != &rule.to && reported.insert(rule) {
            violations.push(Violation::NondeterministicTransition {
                from: rule.from.to_string(),
                symbol: rule.symbol.clone(),
                first: first.to_string(),
                second: rule.to.to_string(),
            });
        }
    }

    violations
}

fn duplicate_transitions(description: &AutomatonDescription) -> Vec<Violation> {
    let mut seen: HashSet<&TransitionRule> = HashSet::new();
    let mut reported = HashSet::new();

    description
        .transitions
        .iter()
        .filter(|rule| !seen.insert(*rule))
        .filter(|rule| reported.insert(*rule))
        .map(|rule| Violation::DuplicateTransition {
            from: rule.from.to_string(),
            symbol: rule.symbol.clone(),
            to: rule.to.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn description(text: &str) -> AutomatonDescription {
        parse(text).unwrap()
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let rules = ValidationRules::standard();
        let description = description(
            "({A, B}, {x}, {
                d(A, x) = B,
                d(A, x) = C,
                d(B, y) = A,
                d(B, y) = A,
            }, A, {Z})",
        );

        let result = rules.validate(&description);

        match result {
            Validation::Failure(errors) => {
                let has_undeclared_state = errors
                    .iter()
                    .any(|e| matches!(e, Violation::UndeclaredState { .. }));
                let has_undeclared_symbol = errors
                    .iter()
                    .any(|e| matches!(e, Violation::UndeclaredSymbol { .. }));
                let has_nondeterminism = errors
                    .iter()
                    .any(|e| matches!(e, Violation::NondeterministicTransition { .. }));
                let has_duplicate = errors
                    .iter()
                    .any(|e| matches!(e, Violation::DuplicateTransition { .. }));

                assert!(has_undeclared_state);
                assert!(has_undeclared_symbol);
                assert!(has_nondeterminism);
                assert!(has_duplicate);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validation_succeeds_for_well_formed_description() {
        let rules = ValidationRules::standard();
        let description = description("({A, B}, {x}, {d(A, x) = B, d(B, x) = A}, A, {B})");

        assert!(rules.validate(&description).is_success());
        assert!(rules.violations(&description).is_empty());
    }

    #[test]
    fn undeclared_states_name_their_role() {
        let rules = ValidationRules::builder().declared_states().build();
        let description = description("({A}, {}, {d(A, x) = B}, S, {F})");

        let violations = rules.violations(&description);

        assert_eq!(
            violations,
            vec![
                Violation::UndeclaredState {
                    state: "S".to_string(),
                    role: "start state",
                },
                Violation::UndeclaredState {
                    state: "F".to_string(),
                    role: "accepting state",
                },
                Violation::UndeclaredState {
                    state: "B".to_string(),
                    role: "transition target",
                },
            ]
        );
    }

    #[test]
    fn empty_declarations_skip_membership_checks() {
        let rules = ValidationRules::standard();
        let description = description("({}, {}, {d(A, x) = B}, A, {B})");

        assert!(rules.validate(&description).is_success());
    }

    #[test]
    fn nondeterminism_is_reported_once_per_conflict() {
        let rules = ValidationRules::builder().deterministic().build();
        let description = description(
            "({A, B, C}, {x}, {d(A, x) = B, d(A, x) = C, d(A, x) = C}, A, {})",
        );

        assert_eq!(
            rules.violations(&description),
            vec![Violation::NondeterministicTransition {
                from: "A".to_string(),
                symbol: "x".to_string(),
                first: "B".to_string(),
                second: "C".to_string(),
            }]
        );
    }

    #[test]
    fn disabled_checks_do_not_run() {
        let rules = ValidationRules::builder().build();
        let description = description("({A}, {x}, {d(A, y) = B, d(A, y) = C}, Q, {})");

        assert!(rules.validate(&description).is_success());
    }

    #[test]
    fn custom_predicate_check_works() {
        let rules = ValidationRules::builder()
            .require_pred(
                |d| !d.accepting.is_empty(),
                "at least one accepting state is required".to_string(),
            )
            .build();

        let result = rules.validate(&description("({A}, {}, {}, A, {})"));
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, Violation::CustomCheckFailed { .. })));
        }
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = ValidationRules::builder()
            .require(|d: &AutomatonDescription| {
                if d.transitions.len() <= 1 {
                    Validation::success(())
                } else {
                    Validation::fail(Violation::CustomCheckFailed {
                        message: "too many transitions".to_string(),
                    })
                }
            })
            .build();

        let small = description("({}, {}, {d(A, x) = A}, A, {})");
        let large = description("({}, {}, {d(A, x) = A, d(A, y) = A}, A, {})");

        assert!(rules.validate(&small).is_success());
        assert!(rules.validate(&large).is_failure());
    }

    #[test]
    fn violation_strategy_is_stored() {
        let rules = ValidationRules::builder()
            .on_violation(ViolationStrategy::Abort)
            .build();

        assert_eq!(rules.violation_strategy(), ViolationStrategy::Abort);
        assert_eq!(
            ValidationRules::standard().violation_strategy(),
            ViolationStrategy::Warn
        );
    }
}
