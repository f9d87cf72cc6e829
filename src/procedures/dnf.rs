/*!
Disjunctive normal forms, generated from a bitmask over a list of atoms.

Given atoms *a*₀ … *a*ₙ₋₁, each row *r* of the truth table over the atoms is a *minterm*: the conjunction of *a*ⱼ if bit *j* of *r* is set, and of ¬*a*ⱼ otherwise.
An index selects rows by setting bits, so the generated formula is the disjunction of the minterms of the rows whose bit is set in the index.

For example, with atoms `[a, b]` the index `6` (`0b0110`) selects rows 1 and 2, and so generates (a ∧ ¬b) ∨ (¬a ∧ b).

```rust
# use otter_logic::config::Config;
# use otter_logic::db::registry::Registry;
let mut registry = Registry::from_config(&Config::default());
let a = registry.atom("a").unwrap();
let b = registry.atom("b").unwrap();

let xor = registry.dnf(&[a, b], 6).unwrap();
let formula = registry.dnf_formula(xor).unwrap().unwrap();
assert_eq!(registry.as_string(formula), "((a ∧ ¬b) ∨ (¬a ∧ b))");
```

The generated formula is simplified, built once (when the DNF node is built), and stored on the node.
Rows beyond the truth table (i.e. bits at or above 2ⁿ) repeat earlier rows, as only the low *n* bits of a row select literals.
*/

use crate::{
    db::{registry::Registry, FormulaKey},
    misc::log::targets::{self},
    structures::formula::FormulaKind,
    types::err::{self},
};

impl Registry {
    /// A DNF node over the given atoms, with the given index.
    pub fn dnf(&mut self, atoms: &[FormulaKey], index: u64) -> Result<FormulaKey, err::ErrorKind> {
        let mut names = Vec::with_capacity(atoms.len());
        for atom in atoms {
            match self.formula(*atom) {
                Some(formula) if formula.is_atom() => names.push(formula.name()),
                Some(_) => return Err(err::RegistryError::NotAnAtom.into()),
                None => return Err(err::RegistryError::UnknownKey.into()),
            }
        }

        let formula = self.minterms(atoms, index)?;

        let name = self.fresh_name(false);
        let key = self.insert(
            name,
            None,
            FormulaKind::Dnf {
                atoms: names,
                index,
                formula,
            },
        );
        Ok(key)
    }

    /// The formula generated by a DNF node, if any.
    pub fn dnf_formula(&self, key: FormulaKey) -> Result<Option<FormulaKey>, err::RegistryError> {
        match self.formula(key).map(|f| f.kind()) {
            Some(FormulaKind::Dnf { formula, .. }) => Ok(*formula),
            Some(_) => Err(err::RegistryError::NotADnf),
            None => Err(err::RegistryError::UnknownKey),
        }
    }

    /// The simplified disjunction of the minterms selected by `index`.
    fn minterms(
        &mut self,
        atoms: &[FormulaKey],
        index: u64,
    ) -> Result<Option<FormulaKey>, err::ErrorKind> {
        let disjunction = self.disjunction(Vec::<FormulaKey>::new())?;

        let mut remaining = index;
        let mut row: u64 = 0;

        while remaining != 0 {
            if remaining & 1 == 1 {
                let mut literals = Vec::with_capacity(atoms.len());
                for (bit, atom) in atoms.iter().enumerate() {
                    let positive = u32::try_from(bit)
                        .ok()
                        .and_then(|bit| row.checked_shr(bit))
                        .is_some_and(|shifted| shifted & 1 == 1);

                    match positive {
                        true => literals.push(*atom),
                        false => literals.push(self.negation(*atom)?),
                    }
                }
                let minterm = self.conjunction(literals)?;
                self.add_formula(disjunction, minterm)?;
            }

            remaining >>= 1;
            row += 1;
        }

        log::trace!(target: targets::SIMPLIFY,
            "Minterms of {index}: {}",
            self.as_string(disjunction)
        );
        // Simplified as an operand, so the generated formula is bound to a name of its own.
        self.simplify_at(disjunction, 1)
    }
}
