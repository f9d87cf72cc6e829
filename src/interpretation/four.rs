use crate::{
    db::registry::Registry,
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        name::Name,
        value::{FOURValue, LogicValue},
    },
    types::err::{self},
};

use super::Interpretation;

/// Evaluation in Belnap's four-valued logic.
///
/// - A conjunction folds the values of its operands with [conjunct](LogicValue::conjunct) from TRUE, and is FALSE as soon as the running value is undesignated.
/// - A disjunction folds the values of its operands with [disjunct](LogicValue::disjunct) from FALSE, and is TRUE as soon as the running value is designated.
///
/// In either case operands without a value are coerced to BOT, and the short-circuit discards any further information, e.g. a conjunction whose running value is BOT is FALSE.
///
/// - An implication is the disjunct of the negated antecedent and the consequent, without any short-circuit.
///   If either side has no value, the implication has no value.
#[allow(clippy::upper_case_acronyms)]
pub struct FOURLogic<'a> {
    assignment: &'a Assignment<FOURValue>,
}

impl<'a> FOURLogic<'a> {
    pub fn new(assignment: &'a Assignment<FOURValue>) -> Self {
        FOURLogic { assignment }
    }

    /// Binds the interpretation to some other assignment.
    pub fn bind(&mut self, assignment: &'a Assignment<FOURValue>) {
        self.assignment = assignment;
    }
}

impl Interpretation for FOURLogic<'_> {
    type Value = FOURValue;

    fn assignment(&self) -> &Assignment<FOURValue> {
        self.assignment
    }

    fn conjunction(
        &self,
        registry: &Registry,
        names: &[Name],
        depth: usize,
    ) -> Result<Option<FOURValue>, err::ErrorKind> {
        let mut value = FOURValue::TRUE;
        for name in names {
            let operand = self.evaluate_name(registry, Some(*name), depth)?;
            value = value.conjunct(FOURValue::coerce(operand));
            if !value.designated() {
                return Ok(Some(FOURValue::FALSE));
            }
        }
        Ok(Some(value))
    }

    fn disjunction(
        &self,
        registry: &Registry,
        names: &[Name],
        depth: usize,
    ) -> Result<Option<FOURValue>, err::ErrorKind> {
        let mut value = FOURValue::FALSE;
        for name in names {
            let operand = self.evaluate_name(registry, Some(*name), depth)?;
            value = value.disjunct(FOURValue::coerce(operand));
            if value.designated() {
                return Ok(Some(FOURValue::TRUE));
            }
        }
        Ok(Some(value))
    }

    fn implication(
        &self,
        registry: &Registry,
        antecedent: Option<Name>,
        consequent: Option<Name>,
        depth: usize,
    ) -> Result<Option<FOURValue>, err::ErrorKind> {
        let p = self.evaluate_name(registry, antecedent, depth)?;
        let q = self.evaluate_name(registry, consequent, depth)?;

        match (p, q) {
            (Some(p), Some(q)) => Ok(Some(p.negate().disjunct(q))),
            _ => {
                log::debug!(target: targets::EVALUATION, "Implication with an unvalued side");
                Ok(None)
            }
        }
    }
}
