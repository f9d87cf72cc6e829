/*!
A partial mapping from (the names of) atoms to truth values, representing some state or goal.

Each assignment has an id, distinct from the id of any other assignment created during the life of a program.
The id is only used for equality and logging, and a [clone](Clone) of an assignment receives a fresh id.

Values are set in one of two ways:
- Without a check, the assignment is mutated in place.
- With a check, if a different value is already set for the name the assignment is left untouched and a *new* assignment is returned, containing the value together with every other entry.

```rust
# use otter_logic::structures::assignment::Assignment;
# use otter_logic::structures::value::BooleanValue;
let mut state = Assignment::default();
assert!(state.set("door_open", Some(BooleanValue::TRUE), true).is_none());

let fork = state.set("door_open", Some(BooleanValue::FALSE), true);
assert_eq!(state.get("door_open"), Some(BooleanValue::TRUE));
assert_eq!(fork.and_then(|f| f.get("door_open")), Some(BooleanValue::FALSE));
```
*/

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
    db::{registry::Registry, FormulaKey},
    misc::log::targets::{self},
    structures::value::LogicValue,
    types::err::ErrorKind,
};

/// The id of an assignment.
pub type AssignmentId = usize;

static ASSIGNMENT_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn fresh_id() -> AssignmentId {
    ASSIGNMENT_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A partial mapping from atom names to values of some family.
#[derive(Debug)]
pub struct Assignment<V: LogicValue> {
    id: AssignmentId,
    values: HashMap<String, V>,
}

impl<V: LogicValue> Default for Assignment<V> {
    fn default() -> Self {
        Assignment {
            id: fresh_id(),
            values: HashMap::default(),
        }
    }
}

impl<V: LogicValue> Clone for Assignment<V> {
    /// An independent copy of the mapping, with a fresh id.
    fn clone(&self) -> Self {
        Assignment {
            id: fresh_id(),
            values: self.values.clone(),
        }
    }
}

impl<V: LogicValue> PartialEq for Assignment<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V: LogicValue> Eq for Assignment<V> {}

impl<V: LogicValue, S: Into<String>> FromIterator<(S, V)> for Assignment<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Assignment {
            id: fresh_id(),
            values: iter.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }
}

impl<V: LogicValue> Assignment<V> {
    pub fn id(&self) -> AssignmentId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<V> {
        self.values.get(name).copied()
    }

    /// The names with some value, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// (Name, Value) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, V)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Sets the value of `name`, where no value removes any existing value.
    ///
    /// If `check` is set and some *different* value is already set for `name` the assignment is unchanged, and a new assignment is returned containing the value for `name` together with every other entry of the assignment.
    /// Otherwise, the assignment is mutated in place and nothing is returned.
    pub fn set(&mut self, name: &str, value: Option<V>, check: bool) -> Option<Self> {
        if check {
            if let Some(existing) = self.values.get(name) {
                if Some(*existing) != value {
                    let mut fork = self.clone();
                    fork.set(name, value, false);
                    log::trace!(target: targets::ASSIGNMENT,
                        "#{} forked to #{} on {name}",
                        self.id,
                        fork.id
                    );
                    return Some(fork);
                }
            }
        }

        match value {
            Some(v) => {
                self.values.insert(name.to_string(), v);
            }
            None => {
                self.values.remove(name);
            }
        }
        None
    }

    /// Removes any value of `name`, and then sets the given value.
    pub fn replace(&mut self, name: &str, value: Option<V>) {
        self.remove(name);
        self.set(name, value, false);
    }

    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.values.remove(name)
    }

    /// A count of the names present in both assignments with equal values.
    ///
    /// If there is no other assignment, or no such name, the assignments are incomparable and nothing is returned.
    pub fn compare(&self, other: Option<&Self>) -> Option<usize> {
        let other = other?;
        let count = self
            .values
            .iter()
            .filter(|(name, value)| other.values.get(*name) == Some(*value))
            .count();

        match count {
            0 => None,
            _ => Some(count),
        }
    }

    /// A fresh assignment containing every entry of both assignments, with the value from `other` whenever both have a value.
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (name, value) in other.iter() {
            merged.set(name, Some(value), false);
        }
        merged
    }

    /// The assignment as a formula.
    ///
    /// Each name is taken as an atom, negated whenever the value of the name is not designated.
    /// - With no entries, there is no formula.
    /// - With one entry, the formula is the (perhaps negated) atom.
    /// - Otherwise, the formula is the conjunction of the (perhaps negated) atoms, ordered by name.
    pub fn to_formula(&self, registry: &mut Registry) -> Result<Option<FormulaKey>, ErrorKind> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut literals = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let atom = registry.atom(name)?;
            match value.designated() {
                true => literals.push(atom),
                false => literals.push(registry.negation(atom)?),
            }
        }

        let formula = match literals.as_slice() {
            [] => None,
            [literal] => Some(*literal),
            _ => Some(registry.conjunction(literals)?),
        };

        if let Some(key) = formula {
            log::trace!(target: targets::ASSIGNMENT, "#{} as {}", self.id, registry.as_string(key));
        }

        Ok(formula)
    }
}

impl<V: LogicValue> std::fmt::Display for Assignment<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = self
            .iter()
            .map(|(n, v)| format!("{n}: {}", v.symbol()))
            .collect::<Vec<_>>();
        entries.sort_unstable();
        write!(f, "#{} {{{}}}", self.id, entries.join(", "))
    }
}
