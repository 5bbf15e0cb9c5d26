//! Validation-based linting of automaton descriptions.
//!
//! The structural queries tolerate loose input: a transition may point at a
//! state that was never declared and still be a node of the graph. This
//! module reports such issues, together with nondeterminism and repeated
//! transitions, using Stillwater's `Validation` type so that every problem
//! is collected in a single pass instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use dfascope::parser::parse;
//! use dfascope::validation::{ValidationRules, Violation, ViolationStrategy};
//!
//! let rules = ValidationRules::builder()
//!     .declared_states()
//!     .deterministic()
//!     .on_violation(ViolationStrategy::Abort)
//!     .build();
//!
//! let description = parse("({A}, {x}, {d(A, x) = B}, A, {})").unwrap();
//! let violations = rules.violations(&description);
//!
//! assert_eq!(violations.len(), 1);
//! assert!(matches!(violations[0], Violation::UndeclaredState { .. }));
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::ValidationBuilder;
pub use rules::ValidationRules;
pub use violations::{Violation, ViolationStrategy};
