/*!
Databases for holding information relevant to a collection of formulas.

At present there is a single database, the [registry](registry), which stores every formula node together with the bindings of names to nodes.
Nodes are accessed through [FormulaKey]s, and nodes refer to one another through names.
*/

mod keys;
pub use keys::FormulaKey;

pub mod registry;
