/*!
Truth values.

A truth value has a symbol, a name, and is either *designated* or not.
Designated values are those counted as true-like, e.g. for the purposes of satisfaction or implication.

Two closed families of values are implemented:
- [BooleanValue], with the two values `TRUE` and `FALSE`.
- [FOURValue], with the four values `FALSE`, `TRUE`, `BOT`, and `TOP` of Belnap's four-valued logic.

Within a family values are combined directly.
A value from some other family is first coerced, with [coerce](LogicValue::coerce), and the absence of a value is coerced in the same way.

```rust
# use otter_logic::structures::value::{BooleanValue, FOURValue, LogicValue};
assert_eq!(BooleanValue::TRUE.conjunct(BooleanValue::FALSE), BooleanValue::FALSE);

assert_eq!(FOURValue::TRUE.conjunct(FOURValue::BOT), FOURValue::BOT);
assert_eq!(FOURValue::coerce(None::<BooleanValue>), FOURValue::BOT);
assert_eq!(BooleanValue::coerce(Some(FOURValue::TOP)), BooleanValue::TRUE);
```
*/

mod boolean;
pub use boolean::BooleanValue;

mod four;
pub use four::FOURValue;

/// Something which is a truth value, closed under negation, conjunction, and disjunction.
pub trait LogicValue: Copy + Eq + std::fmt::Debug + std::fmt::Display {
    /// A short symbol for the value.
    fn symbol(&self) -> &'static str;

    /// The name of the value.
    fn name(&self) -> &'static str;

    /// Whether the value is designated (true-like).
    fn designated(&self) -> bool;

    fn negate(&self) -> Self;

    fn conjunct(&self, other: Self) -> Self;

    fn disjunct(&self, other: Self) -> Self;

    /// The canonical designated value of the family, and the unit of conjunction.
    fn truth() -> Self;

    /// The canonical undesignated value of the family, and the unit of disjunction.
    fn falsity() -> Self;

    /// The value as a value of Belnap's four-valued logic.
    fn as_four(&self) -> FOURValue;

    /// The nearest value of the family to some (perhaps absent) value of any family.
    fn coerce<V: LogicValue>(value: Option<V>) -> Self;
}
