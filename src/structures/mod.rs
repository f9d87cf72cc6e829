//! Key structures, such as formulas, values, and assignments.
//!
//! # Formulas and names
//!
//! A [formula](formula) is a node with a [name](name).
//! Formulas refer to other formulas only through names, and so the meaning of a formula depends on the [registry](crate::db::registry) within which names are resolved.
//!
//! # Values and assignments
//!
//! A [value](value) is a member of some family of truth values, and an [assignment](assignment) is a partial mapping from the names of atoms to values of some family.
//! Formulas are evaluated with respect to an assignment by some [interpretation](crate::interpretation).

pub mod assignment;
pub mod formula;
pub mod name;
pub mod value;
