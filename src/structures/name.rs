/*!
(The internal representation of) a name.

Every formula has a name, and formulas refer to one another by name rather than by key.

Externally, a name is any non-empty string, e.g. `door_open`, `A3`, `F17`.
Internally, each string is interned by a [registry](crate::db::registry::Registry) and the name is the index of the string in the registry's name table.
So, the names of a registry are [0..*m*) for some *m*, and may be used as indices of structures sized to the table.

# Notes
- A name is bound to at most one formula at a time, and a binding may change.
  Anything which holds a name observes the current binding at each lookup.
- Atoms are identified by their names, so two atoms with the same name are the same atom.
*/

/// A name, as interned by some registry.
pub type Name = usize;
