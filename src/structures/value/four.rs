use super::{BooleanValue, LogicValue};

/// A value of Belnap's four-valued logic.
///
/// Each value is a pair of independent pieces of evidence: `x` for the truth of something and `y` for the falsity of something.
///
/// | value | x | y | reading               |
/// |-------|---|---|-----------------------|
/// | FALSE | 0 | 1 | false                 |
/// | TRUE  | 1 | 0 | true                  |
/// | BOT   | 0 | 0 | no evidence           |
/// | TOP   | 1 | 1 | conflicting evidence  |
///
/// A value is designated just in case there is evidence for truth, i.e. for TRUE and TOP.
///
/// Conjunction and disjunction are the meet and join of the truth ordering of the bilattice:
/// - Negate(x, y) = (y, x)
/// - Conjunct((x1, y1), (x2, y2)) = (x1 ∧ x2, y1 ∨ y2)
/// - Disjunct((x1, y1), (x2, y2)) = (x1 ∨ x2, y1 ∧ y2)
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FOURValue {
    x: bool,
    y: bool,
}

impl FOURValue {
    pub const FALSE: Self = FOURValue { x: false, y: true };

    pub const TRUE: Self = FOURValue { x: true, y: false };

    pub const BOT: Self = FOURValue { x: false, y: false };

    pub const TOP: Self = FOURValue { x: true, y: true };

    /// The value with evidence `x` for truth and `y` for falsity.
    pub fn from_evidence(x: bool, y: bool) -> Self {
        FOURValue { x, y }
    }

    /// Evidence for truth.
    pub fn x(&self) -> bool {
        self.x
    }

    /// Evidence for falsity.
    pub fn y(&self) -> bool {
        self.y
    }
}

impl From<bool> for FOURValue {
    fn from(value: bool) -> Self {
        Self::from_evidence(value, !value)
    }
}

impl From<BooleanValue> for FOURValue {
    fn from(value: BooleanValue) -> Self {
        Self::from(value.designated())
    }
}

impl LogicValue for FOURValue {
    fn symbol(&self) -> &'static str {
        match (self.x, self.y) {
            (false, true) => "f",
            (true, false) => "t",
            (false, false) => "⊥",
            (true, true) => "⊤",
        }
    }

    fn name(&self) -> &'static str {
        match (self.x, self.y) {
            (false, true) => "FALSE",
            (true, false) => "TRUE",
            (false, false) => "BOT",
            (true, true) => "TOP",
        }
    }

    fn designated(&self) -> bool {
        self.x
    }

    fn negate(&self) -> Self {
        Self::from_evidence(self.y, self.x)
    }

    fn conjunct(&self, other: Self) -> Self {
        Self::from_evidence(self.x && other.x, self.y || other.y)
    }

    fn disjunct(&self, other: Self) -> Self {
        Self::from_evidence(self.x || other.x, self.y && other.y)
    }

    fn truth() -> Self {
        Self::TRUE
    }

    fn falsity() -> Self {
        Self::FALSE
    }

    fn as_four(&self) -> FOURValue {
        *self
    }

    /// No value is coerced to BOT.
    /// Otherwise, values of the family are unchanged and values of any other family are coerced to TRUE if designated and FALSE if not.
    fn coerce<V: LogicValue>(value: Option<V>) -> Self {
        match value {
            Some(v) => v.as_four(),
            None => Self::BOT,
        }
    }
}

impl std::fmt::Display for FOURValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [FOURValue; 4] = [
        FOURValue::FALSE,
        FOURValue::TRUE,
        FOURValue::BOT,
        FOURValue::TOP,
    ];

    #[test]
    fn negation() {
        assert_eq!(FOURValue::FALSE.negate(), FOURValue::TRUE);
        assert_eq!(FOURValue::TRUE.negate(), FOURValue::FALSE);
        assert_eq!(FOURValue::TOP.negate(), FOURValue::TOP);
        assert_eq!(FOURValue::BOT.negate(), FOURValue::BOT);
    }

    #[test]
    fn lattice_points() {
        assert_eq!(FOURValue::TRUE.conjunct(FOURValue::BOT), FOURValue::BOT);
        assert_eq!(FOURValue::FALSE.disjunct(FOURValue::BOT), FOURValue::BOT);

        assert_eq!(FOURValue::BOT.conjunct(FOURValue::TOP), FOURValue::FALSE);
        assert_eq!(FOURValue::BOT.disjunct(FOURValue::TOP), FOURValue::TRUE);
    }

    #[test]
    fn units_and_absorbers() {
        for value in VALUES {
            assert_eq!(FOURValue::TRUE.conjunct(value), value);
            assert_eq!(FOURValue::FALSE.disjunct(value), value);
            assert_eq!(FOURValue::FALSE.conjunct(value), FOURValue::FALSE);
            assert_eq!(FOURValue::TRUE.disjunct(value), FOURValue::TRUE);
        }
    }

    #[test]
    fn de_morgan() {
        for a in VALUES {
            for b in VALUES {
                assert_eq!(a.conjunct(b).negate(), a.negate().disjunct(b.negate()));
                assert_eq!(a.disjunct(b).negate(), a.negate().conjunct(b.negate()));
            }
        }
    }

    #[test]
    fn designation() {
        let designated = VALUES.iter().filter(|v| v.designated()).collect::<Vec<_>>();
        assert_eq!(designated, vec![&FOURValue::TRUE, &FOURValue::TOP]);
    }

    #[test]
    fn coercion() {
        assert_eq!(FOURValue::coerce(None::<FOURValue>), FOURValue::BOT);
        assert_eq!(FOURValue::coerce(Some(FOURValue::TOP)), FOURValue::TOP);
        assert_eq!(FOURValue::coerce(Some(BooleanValue::TRUE)), FOURValue::TRUE);
        assert_eq!(FOURValue::coerce(Some(BooleanValue::FALSE)), FOURValue::FALSE);
    }
}
