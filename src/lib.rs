//! A small symbolic propositional logic engine.
//!
//! otter_logic is a library for building propositional formulas, simplifying formulas by a handful of logical identities, and evaluating formulas with respect to a (partial) assignment of truth values, in either classical two-valued logic or Belnap's four-valued logic.
//!
//! The library is written to support 'world rules': formulas describing which states of some world are desired or implied, evaluated against the current state of the world.
//!
//! # Orientation
//!
//! The library is designed around a [registry](crate::db::registry).
//!
//! Every formula node is stored in the registry and is accessed by a [key](crate::db::FormulaKey).
//! Nodes do not own their operands.
//! Instead, every node has a [name](crate::structures::name), and nodes refer to operands by name.
//! So, an edge between two nodes is a lookup of whichever node is bound to some name at the time of the lookup.
//!
//! Useful starting points, then, may be:
//! - The [registry](crate::db::registry), for building formulas.
//! - The [structures], to familiarise yourself with formulas, values, and assignments.
//! - The [procedures], for [simplification](crate::procedures::simplify) and [DNF generation](crate::procedures::dnf).
//! - The [interpretations](crate::interpretation), for evaluation.
//! - The [world database](crate::world), for rules and goals over some current state.
//!
//! # Examples
//!
//! + Build exclusive or as a DNF, and evaluate it on each row of its truth table.
//!
//! ```rust
//! # use otter_logic::config::Config;
//! # use otter_logic::db::registry::Registry;
//! # use otter_logic::interpretation::{BooleanLogic, Interpretation};
//! # use otter_logic::structures::{assignment::Assignment, value::BooleanValue};
//! let mut registry = Registry::from_config(&Config::default());
//! let a = registry.atom("a").unwrap();
//! let b = registry.atom("b").unwrap();
//!
//! let xor = registry.dnf(&[a, b], 0b0110).unwrap();
//!
//! for (a_value, b_value) in [(true, true), (true, false), (false, true), (false, false)] {
//!     let state = Assignment::from_iter([
//!         ("a", BooleanValue::from(a_value)),
//!         ("b", BooleanValue::from(b_value)),
//!     ]);
//!     let value = BooleanLogic::new(&state).evaluate(&registry, xor);
//!     assert_eq!(value, Ok(Some(BooleanValue::from(a_value != b_value))));
//! }
//! ```
//!
//! + Simplify a formula.
//!
//! ```rust
//! # use otter_logic::config::Config;
//! # use otter_logic::db::registry::Registry;
//! let mut registry = Registry::from_config(&Config::default());
//! let a = registry.atom("a").unwrap();
//! let not_a = registry.negation(a).unwrap();
//! let not_not_a = registry.negation(not_a).unwrap();
//!
//! assert_eq!(registry.simplify(not_not_a), Ok(Some(a)));
//!
//! let contradiction = registry.conjunction([a, not_a]).unwrap();
//! assert_eq!(registry.simplify(contradiction), Ok(None));
//! ```
//!
//! # Cycles
//!
//! As names may be rebound, a formula may (transitively) refer to itself.
//! Traversals of formulas are bounded by a [configured](crate::config) depth limit, and the names on any cycle may be found with [cyclic_names](crate::db::registry::Registry::cyclic_names).
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [simplification](crate::procedures::simplify) can be filtered with `RUST_LOG=simplify …` or,
//! - Logs of rebinding without information about each registration can be found with `RUST_LOG=registry=debug …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod db;
pub mod interpretation;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
pub mod world;
