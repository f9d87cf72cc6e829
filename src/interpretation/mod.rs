/*!
Interpretations, for evaluating formulas with respect to an [assignment](crate::structures::assignment).

An interpretation is bound to an assignment of values of some family, and evaluates a formula by walking the formula, resolving the names of operands through a [registry](crate::db::registry::Registry).

Evaluation of atoms, negations, and DNFs is shared by every interpretation:
- An atom takes the value of its name in the assignment, if any.
- A negation negates the value of its operand.
- A DNF takes the value of its generated formula.

While each interpretation supplies the evaluation of conjunctions, disjunctions, and implications.
Two interpretations are implemented:
- [BooleanLogic], over [BooleanValue](crate::structures::value::BooleanValue)s.
- [FOURLogic], over [FOURValue](crate::structures::value::FOURValue)s.

Throughout, the absence of a value is distinct from any value, and a name which does not resolve has no value.

```rust
# use otter_logic::config::Config;
# use otter_logic::db::registry::Registry;
# use otter_logic::interpretation::{BooleanLogic, Interpretation};
# use otter_logic::structures::assignment::Assignment;
# use otter_logic::structures::value::BooleanValue;
let mut registry = Registry::from_config(&Config::default());
let p = registry.atom("p").unwrap();
let q = registry.atom("q").unwrap();
let rule = registry.implication(Some(p), Some(q)).unwrap();

let state = Assignment::from_iter([("p", BooleanValue::TRUE), ("q", BooleanValue::FALSE)]);
let logic = BooleanLogic::new(&state);

assert_eq!(logic.evaluate(&registry, rule), Ok(Some(BooleanValue::FALSE)));
```
*/

mod boolean;
pub use boolean::BooleanLogic;

mod four;
pub use four::FOURLogic;

use crate::{
    db::{registry::Registry, FormulaKey},
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        formula::{Formula, FormulaKind},
        name::Name,
        value::LogicValue,
    },
    types::err::{self},
};

/// An evaluation of formulas, relative to an assignment.
pub trait Interpretation {
    /// The family of values the interpretation evaluates to.
    type Value: LogicValue;

    /// The assignment the interpretation is bound to.
    fn assignment(&self) -> &Assignment<Self::Value>;

    /// The value of a conjunction of the formulas bound to `names`.
    fn conjunction(
        &self,
        registry: &Registry,
        names: &[Name],
        depth: usize,
    ) -> Result<Option<Self::Value>, err::ErrorKind>;

    /// The value of a disjunction of the formulas bound to `names`.
    fn disjunction(
        &self,
        registry: &Registry,
        names: &[Name],
        depth: usize,
    ) -> Result<Option<Self::Value>, err::ErrorKind>;

    /// The value of an implication between the formulas bound to the (optional) names.
    fn implication(
        &self,
        registry: &Registry,
        antecedent: Option<Name>,
        consequent: Option<Name>,
        depth: usize,
    ) -> Result<Option<Self::Value>, err::ErrorKind>;

    /// The value of the formula stored under the key, if any.
    fn evaluate(
        &self,
        registry: &Registry,
        formula: FormulaKey,
    ) -> Result<Option<Self::Value>, err::ErrorKind> {
        match registry.formula(formula) {
            Some(formula) => self.evaluate_formula(registry, formula, 0),
            None => Ok(None),
        }
    }

    /// The value of the formula bound to a name, if any.
    fn evaluate_name(
        &self,
        registry: &Registry,
        name: Option<Name>,
        depth: usize,
    ) -> Result<Option<Self::Value>, err::ErrorKind> {
        match name.and_then(|name| registry.resolve(name)) {
            Some((_, formula)) => self.evaluate_formula(registry, formula, depth + 1),
            None => Ok(None),
        }
    }

    /// The value of a formula, dispatched on the kind of the formula.
    fn evaluate_formula(
        &self,
        registry: &Registry,
        formula: &Formula,
        depth: usize,
    ) -> Result<Option<Self::Value>, err::ErrorKind> {
        if depth > registry.config.depth_limit.value {
            log::error!(target: targets::EVALUATION,
                "Depth limit exceeded at {}",
                registry.name_str(formula.name())
            );
            return Err(err::ErrorKind::DepthExceeded);
        }

        let value = match formula.kind() {
            FormulaKind::Atom => self.assignment().get(registry.name_str(formula.name())),

            FormulaKind::Negation(operand) => self
                .evaluate_name(registry, Some(*operand), depth)?
                .map(|value| value.negate()),

            FormulaKind::Conjunction(names) => self.conjunction(registry, names, depth)?,

            FormulaKind::Disjunction(names) => self.disjunction(registry, names, depth)?,

            FormulaKind::Implication {
                antecedent,
                consequent,
            } => self.implication(registry, *antecedent, *consequent, depth)?,

            FormulaKind::Dnf { formula, .. } => match formula.and_then(|k| registry.formula(k)) {
                Some(generated) => self.evaluate_formula(registry, generated, depth + 1)?,
                None => None,
            },
        };

        log::trace!(target: targets::EVALUATION,
            "{} = {}",
            registry.name_str(formula.name()),
            value.map_or("∅", |v| v.symbol())
        );

        Ok(value)
    }
}
