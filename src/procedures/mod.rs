/*!
Procedures over the formulas of a [registry](crate::db::registry::Registry).

- [Structural equality](equality), used throughout simplification.
- [Simplification](simplify), by a handful of logical identities.
- [Generation of a DNF](dnf), from a bitmask over a list of atoms.

Each procedure is a method on the registry, as operands are resolved by name through the registry.
*/

pub mod dnf;
pub mod equality;
pub mod simplify;
