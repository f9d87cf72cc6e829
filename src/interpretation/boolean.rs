use crate::{
    db::registry::Registry,
    structures::{
        assignment::Assignment,
        name::Name,
        value::{BooleanValue, LogicValue},
    },
    types::err::{self},
};

use super::Interpretation;

/// Classical two-valued evaluation.
///
/// - A conjunction is false as soon as some operand is false, has no value as soon as some operand has no value, and is otherwise true.
/// - A disjunction is true as soon as some operand is true, and is otherwise false.
///   Note, operands without a value do not prevent a disjunction from being false.
/// - An implication is true if the consequent is true, and otherwise true only if the antecedent is false.
///   If the value of a side is required and absent, the implication has no value.
pub struct BooleanLogic<'a> {
    assignment: &'a Assignment<BooleanValue>,
}

impl<'a> BooleanLogic<'a> {
    pub fn new(assignment: &'a Assignment<BooleanValue>) -> Self {
        BooleanLogic { assignment }
    }

    /// Binds the interpretation to some other assignment.
    pub fn bind(&mut self, assignment: &'a Assignment<BooleanValue>) {
        self.assignment = assignment;
    }
}

impl Interpretation for BooleanLogic<'_> {
    type Value = BooleanValue;

    fn assignment(&self) -> &Assignment<BooleanValue> {
        self.assignment
    }

    fn conjunction(
        &self,
        registry: &Registry,
        names: &[Name],
        depth: usize,
    ) -> Result<Option<BooleanValue>, err::ErrorKind> {
        for name in names {
            match self.evaluate_name(registry, Some(*name), depth)? {
                None => return Ok(None),
                Some(value) if !value.designated() => return Ok(Some(BooleanValue::FALSE)),
                Some(_) => {}
            }
        }
        Ok(Some(BooleanValue::TRUE))
    }

    fn disjunction(
        &self,
        registry: &Registry,
        names: &[Name],
        depth: usize,
    ) -> Result<Option<BooleanValue>, err::ErrorKind> {
        for name in names {
            if let Some(value) = self.evaluate_name(registry, Some(*name), depth)? {
                if value.designated() {
                    return Ok(Some(BooleanValue::TRUE));
                }
            }
        }
        Ok(Some(BooleanValue::FALSE))
    }

    fn implication(
        &self,
        registry: &Registry,
        antecedent: Option<Name>,
        consequent: Option<Name>,
        depth: usize,
    ) -> Result<Option<BooleanValue>, err::ErrorKind> {
        match self.evaluate_name(registry, consequent, depth)? {
            None => return Ok(None),
            Some(q) if q.designated() => return Ok(Some(BooleanValue::TRUE)),
            Some(_) => {}
        }

        match self.evaluate_name(registry, antecedent, depth)? {
            None => Ok(None),
            Some(p) if !p.designated() => Ok(Some(BooleanValue::TRUE)),
            Some(_) => Ok(Some(BooleanValue::FALSE)),
        }
    }
}
