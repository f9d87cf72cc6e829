/*!
Construction and mutation of formula nodes.

Every constructor stores the node and binds its name before returning the key of the node.
Operands are given as keys, and the *names* of the operands are stored.

Redundant operations are not errors:
- Building an atom with a name already bound to an atom returns the key of the existing atom.
- Adding a name to a junction which already contains the name does nothing, as does adding a junction to itself.
  The outcome is reported through [JunctionOk].
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

/// Ok results when adding a formula to a junction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JunctionOk {
    /// The name of the formula was added.
    Added,

    /// The formula was a junction of the same kind, and the names of its operands were added individually.
    Flattened,

    /// The name was already present, and so was not added.
    Duplicate,

    /// The name was the name of the junction, and so was not added.
    SelfReference,
}

impl Registry {
    /// The atom with the given name.
    ///
    /// If the name is already bound to an atom, the key of that atom is returned.
    pub fn atom(&mut self, name: &str) -> Result<FormulaKey, err::RegistryError> {
        if name.is_empty() {
            return Err(err::RegistryError::EmptyName);
        }
        let name = self.intern(name);
        if let Some((key, formula)) = self.resolve(name) {
            if formula.is_atom() {
                log::trace!(target: targets::REGISTRY, "Existing atom {}", self.name_str(name));
                return Ok(key);
            }
        }
        Ok(self.insert(name, None, FormulaKind::Atom))
    }

    /// An atom with a generated name.
    pub fn fresh_atom(&mut self) -> FormulaKey {
        let name = self.fresh_name(true);
        self.insert(name, None, FormulaKind::Atom)
    }

    /// The negation of the formula stored under `operand`.
    pub fn negation(&mut self, operand: FormulaKey) -> Result<FormulaKey, err::RegistryError> {
        let operand = self.operand_name(operand)?;
        let name = self.fresh_name(false);
        Ok(self.insert(name, None, FormulaKind::Negation(operand)))
    }

    /// The conjunction of the given formulas, in order.
    pub fn conjunction(
        &mut self,
        operands: impl IntoIterator<Item = FormulaKey>,
    ) -> Result<FormulaKey, err::RegistryError> {
        self.junction(JunctionKind::Conjunction, operands)
    }

    /// The disjunction of the given formulas, in order.
    pub fn disjunction(
        &mut self,
        operands: impl IntoIterator<Item = FormulaKey>,
    ) -> Result<FormulaKey, err::RegistryError> {
        self.junction(JunctionKind::Disjunction, operands)
    }

    /// A junction of the given kind over the given formulas, in order.
    ///
    /// Operands are added as with [add_formula](Registry::add_formula).
    pub fn junction(
        &mut self,
        kind: JunctionKind,
        operands: impl IntoIterator<Item = FormulaKey>,
    ) -> Result<FormulaKey, err::RegistryError> {
        let operands = operands.into_iter().collect::<Vec<_>>();
        if operands.iter().any(|key| self.formula(*key).is_none()) {
            return Err(err::RegistryError::UnknownKey);
        }

        let name = self.fresh_name(false);
        let key = self.insert(name, None, kind.with(Vec::with_capacity(operands.len())));
        for operand in operands {
            self.add_formula(key, operand)?;
        }
        Ok(key)
    }

    /// An implication, from the (optional) antecedent to the (optional) consequent.
    pub fn implication(
        &mut self,
        antecedent: Option<FormulaKey>,
        consequent: Option<FormulaKey>,
    ) -> Result<FormulaKey, err::RegistryError> {
        let antecedent = antecedent.map(|key| self.operand_name(key)).transpose()?;
        let consequent = consequent.map(|key| self.operand_name(key)).transpose()?;

        let name = self.fresh_name(false);
        Ok(self.insert(
            name,
            None,
            FormulaKind::Implication {
                antecedent,
                consequent,
            },
        ))
    }

    /// Sets (or clears) the antecedent of an implication.
    pub fn set_antecedent(
        &mut self,
        implication: FormulaKey,
        antecedent: Option<FormulaKey>,
    ) -> Result<(), err::RegistryError> {
        let name = antecedent.map(|key| self.operand_name(key)).transpose()?;
        match self.formulas.get_mut(implication).map(|f| &mut f.kind) {
            Some(FormulaKind::Implication { antecedent, .. }) => {
                *antecedent = name;
                Ok(())
            }
            Some(_) => Err(err::RegistryError::NotAnImplication),
            None => Err(err::RegistryError::UnknownKey),
        }
    }

    /// Sets (or clears) the consequent of an implication.
    pub fn set_consequent(
        &mut self,
        implication: FormulaKey,
        consequent: Option<FormulaKey>,
    ) -> Result<(), err::RegistryError> {
        let name = consequent.map(|key| self.operand_name(key)).transpose()?;
        match self.formulas.get_mut(implication).map(|f| &mut f.kind) {
            Some(FormulaKind::Implication { consequent, .. }) => {
                *consequent = name;
                Ok(())
            }
            Some(_) => Err(err::RegistryError::NotAnImplication),
            None => Err(err::RegistryError::UnknownKey),
        }
    }

    /// Adds a formula to a junction.
    ///
    /// - If the formula is a junction of the same kind, the names of its operands are added individually (the junction is flattened).
    ///   Junctions of the opposite kind are added as any other formula.
    /// - A name already present in the junction, or the name of the junction itself, is not added.
    pub fn add_formula(
        &mut self,
        junction: FormulaKey,
        formula: FormulaKey,
    ) -> Result<JunctionOk, err::RegistryError> {
        let added = self
            .formulas
            .get(formula)
            .ok_or(err::RegistryError::UnknownKey)?;
        let added_name = added.name;
        let added_junction = added
            .junction()
            .map(|(kind, names)| (kind, names.to_vec()));

        let (kind, own_name) = match self.formulas.get(junction) {
            Some(target) => match target.junction() {
                Some((kind, _)) => (kind, target.name),
                None => return Err(err::RegistryError::NotAJunction),
            },
            None => return Err(err::RegistryError::UnknownKey),
        };

        if added_name == own_name {
            return Ok(JunctionOk::SelfReference);
        }

        match added_junction {
            Some((added_kind, names)) if added_kind == kind => {
                for name in names {
                    self.push_name(junction, name)?;
                }
                Ok(JunctionOk::Flattened)
            }
            _ => self.push_name(junction, added_name),
        }
    }

    /// Adds a name to a junction, respecting the invariants of a junction.
    fn push_name(
        &mut self,
        junction: FormulaKey,
        name: Name,
    ) -> Result<JunctionOk, err::RegistryError> {
        let target = self
            .formulas
            .get_mut(junction)
            .ok_or(err::RegistryError::UnknownKey)?;
        let own_name = target.name;
        let names = target
            .junction_mut()
            .ok_or(err::RegistryError::NotAJunction)?;

        if name == own_name {
            Ok(JunctionOk::SelfReference)
        } else if names.contains(&name) {
            Ok(JunctionOk::Duplicate)
        } else {
            names.push(name);
            Ok(JunctionOk::Added)
        }
    }

    /// The name of the formula stored under a key, for use as an operand.
    fn operand_name(&self, key: FormulaKey) -> Result<Name, err::RegistryError> {
        match self.formulas.get(key) {
            Some(formula) => Ok(formula.name),
            None => Err(err::RegistryError::UnknownKey),
        }
    }
}
