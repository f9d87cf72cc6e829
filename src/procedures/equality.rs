/*!
Structural equality of formulas.

Two formulas are structurally equal when:
- Both are atoms with the same name.
- Both are negations, and the (resolved) operands are structurally equal.
- Both are junctions of the same kind with the same number of operands, and every operand of the first is structurally equal to *some* operand of the second.
  Matches are not consumed, so an operand repeated in the first may match a single operand of the second.
- Both are implications, and the antecedents and consequents are structurally equal, where two absent sides are equal.

A DNF is compared by the formula it generated.
Names which do not resolve are equal only to names which do not resolve.

# Example

```rust
# use otter_logic::config::Config;
# use otter_logic::db::registry::Registry;
let mut registry = Registry::from_config(&Config::default());
let a = registry.atom("a").unwrap();
let b = registry.atom("b").unwrap();

let a_b = registry.conjunction([a, b]).unwrap();
let b_a = registry.conjunction([b, a]).unwrap();
let a_or_b = registry.disjunction([a, b]).unwrap();

assert!(registry.structurally_eq(a_b, b_a));
assert!(!registry.structurally_eq(a_b, a_or_b));
```
*/

use crate::{
    db::{registry::Registry, FormulaKey},
    misc::log::targets::{self},
    structures::{
        formula::{Formula, FormulaKind},
        name::Name,
    },
};

impl Registry {
    /// Whether the formulas stored under the keys are structurally equal.
    ///
    /// If the comparison exceeds the depth limit, the formulas are not equal.
    pub fn structurally_eq(&self, a: FormulaKey, b: FormulaKey) -> bool {
        match (self.formula(a), self.formula(b)) {
            (Some(a), Some(b)) => self.formulas_eq(a, b, 0),
            (None, None) => true,
            _ => false,
        }
    }

    /// Whether the formulas bound to the (optional) names are structurally equal.
    fn names_eq(&self, a: Option<Name>, b: Option<Name>, depth: usize) -> bool {
        let a = a.and_then(|name| self.resolve(name));
        let b = b.and_then(|name| self.resolve(name));
        match (a, b) {
            (Some((_, a)), Some((_, b))) => self.formulas_eq(a, b, depth + 1),
            (None, None) => true,
            _ => false,
        }
    }

    fn formulas_eq(&self, a: &Formula, b: &Formula, depth: usize) -> bool {
        if depth > self.config.depth_limit.value {
            log::warn!(target: targets::SIMPLIFY, "Depth limit exceeded during comparison");
            return false;
        }

        match (&a.kind, &b.kind) {
            (FormulaKind::Dnf { formula, .. }, _) => match formula.and_then(|k| self.formula(k)) {
                Some(a) => self.formulas_eq(a, b, depth + 1),
                None => false,
            },

            (_, FormulaKind::Dnf { formula, .. }) => match formula.and_then(|k| self.formula(k)) {
                Some(b) => self.formulas_eq(a, b, depth + 1),
                None => false,
            },

            (FormulaKind::Atom, FormulaKind::Atom) => a.name == b.name,

            (FormulaKind::Negation(x), FormulaKind::Negation(y)) => {
                self.names_eq(Some(*x), Some(*y), depth)
            }

            (FormulaKind::Conjunction(xs), FormulaKind::Conjunction(ys))
            | (FormulaKind::Disjunction(xs), FormulaKind::Disjunction(ys)) => {
                xs.len() == ys.len()
                    && xs.iter().all(|x| {
                        ys.iter()
                            .any(|y| self.names_eq(Some(*x), Some(*y), depth))
                    })
            }

            (
                FormulaKind::Implication {
                    antecedent: p1,
                    consequent: q1,
                },
                FormulaKind::Implication {
                    antecedent: p2,
                    consequent: q2,
                },
            ) => self.names_eq(*p1, *p2, depth) && self.names_eq(*q1, *q2, depth),

            _ => false,
        }
    }
}
