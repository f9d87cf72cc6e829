/*!
Structural simplification of formulas.

Simplification returns either some (perhaps fresh) formula, or no formula.
No formula is returned when a formula collapses entirely, and the absence carries a different reading depending on what collapsed:
- A conjunction containing a formula and its negation is unsatisfiable, and collapses.
- A disjunction drops each pair of a formula and its negation, and collapses if nothing remains.
- A junction with no operands collapses.

No distinction is made between these cases.

The rules, by kind of formula:
- **Atom**: the atom.
- **Negation**: if the operand is an atom, the negation itself.
  Otherwise, the operand is simplified and:
  + A negation is eliminated (¬¬F = F).
  + A junction is negated operand-by-operand and the junction kind is swapped (De Morgan), where operands which collapse are dropped.
  + Anything else is negated.
- **Junction**: operands are simplified, flattening operands of the same kind.
  Then, pairs of operands are scanned for a formula and its negation (see above) and for repeated formulas, which are dropped.
  If a single operand remains, it is returned; otherwise a junction of the same kind is returned.
- **Implication**: P → Q is simplified as ¬P ∨ Q, where an absent side is dropped.
- **DNF**: the generated formula.

Simplification never rebinds an existing name, and so never changes the meaning of the formula simplified (or of anything which refers to it).
- The junction returned from simplifying a junction keeps the name and entity of the original, but is stored *unbound*.
  So, the name continues to resolve to the original, and [register](Registry::register) may be used to adopt the simplification.
- Any other node built during simplification, including junctions rebuilt beneath the returned formula, is given a fresh name, as the returned formula refers to it by name.

```rust
# use otter_logic::config::Config;
# use otter_logic::db::registry::Registry;
let mut registry = Registry::from_config(&Config::default());
let a = registry.atom("a").unwrap();
let b = registry.atom("b").unwrap();

let a_b = registry.conjunction([a, b]).unwrap();
let not_a_b = registry.negation(a_b).unwrap();

let simplified = registry.simplify(not_a_b).unwrap().unwrap();
assert_eq!(registry.as_string(simplified), "(¬a ∨ ¬b)");
```
*/

use crate::{
    db::{registry::Registry, FormulaKey},
    misc::log::targets::{self},
    structures::{
        formula::{FormulaKind, JunctionKind},
        name::Name,
    },
    types::err::{self},
};

impl Registry {
    /// The simplification of the formula stored under the key, or nothing if the formula collapses.
    ///
    /// A key to no formula simplifies to nothing.
    pub fn simplify(&mut self, key: FormulaKey) -> Result<Option<FormulaKey>, err::ErrorKind> {
        let simplified = self.simplify_at(key, 0)?;
        match simplified {
            Some(result) => {
                log::trace!(target: targets::SIMPLIFY,
                    "{} ⇒ {}",
                    self.as_string(key),
                    self.as_string(result)
                )
            }
            None => log::trace!(target: targets::SIMPLIFY, "{} ⇒ ∅", self.as_string(key)),
        }
        Ok(simplified)
    }

    /// Simplification at some depth of a traversal.
    ///
    /// At depth zero a rebuilt junction is stored unbound, and otherwise it is bound to a fresh name.
    pub(crate) fn simplify_at(
        &mut self,
        key: FormulaKey,
        depth: usize,
    ) -> Result<Option<FormulaKey>, err::ErrorKind> {
        if depth > self.config.depth_limit.value {
            log::error!(target: targets::SIMPLIFY,
                "Depth limit exceeded at {}",
                self.name_of(key).unwrap_or_default()
            );
            return Err(err::ErrorKind::DepthExceeded);
        }

        let Some(formula) = self.formula(key) else {
            return Ok(None);
        };

        match formula.kind().clone() {
            FormulaKind::Atom => Ok(Some(key)),

            FormulaKind::Negation(operand) => self.simplify_negation(key, operand, depth),

            FormulaKind::Conjunction(names) => {
                self.simplify_junction(key, JunctionKind::Conjunction, names, depth)
            }

            FormulaKind::Disjunction(names) => {
                self.simplify_junction(key, JunctionKind::Disjunction, names, depth)
            }

            FormulaKind::Implication {
                antecedent,
                consequent,
            } => self.simplify_implication(antecedent, consequent, depth),

            FormulaKind::Dnf { formula, .. } => Ok(formula),
        }
    }

    fn simplify_name(
        &mut self,
        name: Name,
        depth: usize,
    ) -> Result<Option<FormulaKey>, err::ErrorKind> {
        match self.binding(name) {
            Some(key) => self.simplify_at(key, depth + 1),
            None => Ok(None),
        }
    }

    fn simplify_negation(
        &mut self,
        key: FormulaKey,
        operand: Name,
        depth: usize,
    ) -> Result<Option<FormulaKey>, err::ErrorKind> {
        let Some((operand_key, operand_formula)) = self.resolve(operand) else {
            return Ok(None);
        };

        if operand_formula.is_atom() {
            return Ok(Some(key));
        }

        let Some(simplified) = self.simplify_at(operand_key, depth + 1)? else {
            return Ok(None);
        };

        let Some(simplified_formula) = self.formula(simplified) else {
            return Ok(None);
        };

        if let Some(inner) = simplified_formula.negated() {
            return Ok(self.binding(inner));
        }

        if let Some((kind, names)) = simplified_formula.junction() {
            let names = names.to_vec();
            let mut negated = Vec::with_capacity(names.len());

            for name in names {
                let Some(operand) = self.binding(name) else {
                    continue;
                };
                let negation = self.negation(operand)?;
                if let Some(simplified) = self.simplify_at(negation, depth + 1)? {
                    negated.push(simplified);
                }
            }

            return match negated.as_slice() {
                [] => Ok(None),
                [single] => Ok(Some(*single)),
                _ => Ok(Some(self.junction(kind.opposite(), negated)?)),
            };
        }

        Ok(Some(self.negation(simplified)?))
    }

    fn simplify_junction(
        &mut self,
        key: FormulaKey,
        kind: JunctionKind,
        names: Vec<Name>,
        depth: usize,
    ) -> Result<Option<FormulaKey>, err::ErrorKind> {
        let mut operands: Vec<FormulaKey> = Vec::with_capacity(names.len());

        for name in names {
            let Some(simplified) = self.simplify_name(name, depth)? else {
                continue;
            };

            match self.formula(simplified).and_then(|f| f.junction()) {
                Some((simplified_kind, inner)) if simplified_kind == kind => {
                    operands.extend(inner.iter().filter_map(|name| self.binding(*name)));
                }
                _ => operands.push(simplified),
            }
        }

        let mut marked = vec![false; operands.len()];

        for i in 0..operands.len() {
            if marked[i] {
                continue;
            }

            let negated = self.formula(operands[i]).and_then(|f| f.negated());

            for j in 0..operands.len() {
                if i == j || marked[j] {
                    continue;
                }

                let complementary = negated
                    .and_then(|operand| self.binding(operand))
                    .is_some_and(|operand| self.structurally_eq(operand, operands[j]));

                if complementary {
                    match kind {
                        JunctionKind::Conjunction => {
                            log::trace!(target: targets::SIMPLIFY,
                                "Contradiction in {}",
                                self.name_of(key).unwrap_or_default()
                            );
                            return Ok(None);
                        }
                        JunctionKind::Disjunction => {
                            marked[i] = true;
                            marked[j] = true;
                        }
                    }
                } else if self.structurally_eq(operands[i], operands[j]) {
                    marked[j] = true;
                }
            }
        }

        let remaining = operands
            .into_iter()
            .zip(marked)
            .filter_map(|(operand, marked)| (!marked).then_some(operand))
            .collect::<Vec<_>>();

        match remaining.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(*single)),
            _ => {
                let Some(original) = self.formula(key) else {
                    return Ok(None);
                };
                let (name, entity) = (original.name, original.entity);
                let names = remaining
                    .iter()
                    .filter_map(|operand| self.formula(*operand).map(|f| f.name))
                    .collect::<Vec<_>>();

                let rebuilt = match depth {
                    0 => self.store_unbound(name, entity, kind.with(names)),
                    _ => {
                        let fresh = self.fresh_name(false);
                        self.insert(fresh, entity, kind.with(names))
                    }
                };
                Ok(Some(rebuilt))
            }
        }
    }

    fn simplify_implication(
        &mut self,
        antecedent: Option<Name>,
        consequent: Option<Name>,
        depth: usize,
    ) -> Result<Option<FormulaKey>, err::ErrorKind> {
        let p = antecedent.and_then(|name| self.binding(name));
        let q = consequent.and_then(|name| self.binding(name));

        match (p, q) {
            (None, None) => Ok(None),

            (None, Some(q)) => self.simplify_at(q, depth + 1),

            (Some(p), None) => {
                let not_p = self.negation(p)?;
                self.simplify_at(not_p, depth + 1)
            }

            (Some(p), Some(q)) => {
                let not_p = self.negation(p)?;
                let not_p = self.simplify_at(not_p, depth + 1)?;
                let q = self.simplify_at(q, depth + 1)?;

                match (not_p, q) {
                    (Some(not_p), Some(q)) => {
                        let disjunction = self.disjunction([not_p, q])?;
                        self.simplify_at(disjunction, depth + 1)
                    }
                    (Some(side), None) | (None, Some(side)) => Ok(Some(side)),
                    (None, None) => Ok(None),
                }
            }
        }
    }
}
