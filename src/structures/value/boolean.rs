use super::{FOURValue, LogicValue};

/// A classical (two-valued) truth value.
///
/// There are exactly two values, [TRUE](BooleanValue::TRUE) and [FALSE](BooleanValue::FALSE).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BooleanValue {
    symbol: &'static str,
    name: &'static str,
    designated: bool,
}

impl BooleanValue {
    pub const TRUE: Self = BooleanValue {
        symbol: "1",
        name: "TRUE",
        designated: true,
    };

    pub const FALSE: Self = BooleanValue {
        symbol: "0",
        name: "FALSE",
        designated: false,
    };
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        match value {
            true => Self::TRUE,
            false => Self::FALSE,
        }
    }
}

impl LogicValue for BooleanValue {
    fn symbol(&self) -> &'static str {
        self.symbol
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn designated(&self) -> bool {
        self.designated
    }

    fn negate(&self) -> Self {
        Self::from(!self.designated)
    }

    fn conjunct(&self, other: Self) -> Self {
        Self::from(self.designated && other.designated)
    }

    fn disjunct(&self, other: Self) -> Self {
        Self::from(self.designated || other.designated)
    }

    fn truth() -> Self {
        Self::TRUE
    }

    fn falsity() -> Self {
        Self::FALSE
    }

    fn as_four(&self) -> FOURValue {
        FOURValue::from(*self)
    }

    /// Any designated value is coerced to true, and anything else (including no value) to false.
    fn coerce<V: LogicValue>(value: Option<V>) -> Self {
        match value {
            Some(v) if v.designated() => Self::TRUE,
            _ => Self::FALSE,
        }
    }
}

impl std::fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
