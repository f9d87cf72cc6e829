//! Configuration of databases.

use super::ConfigOption;

/// Configuration of a [Registry](crate::db::registry::Registry).
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// The prefix of names generated for atoms which are never explicitly named.
    pub atom_prefix: &'static str,

    /// The prefix of names generated for compound formulas which are never explicitly named.
    pub formula_prefix: &'static str,

    /// The depth at which a traversal of a formula is abandoned.
    ///
    /// Names may be bound so as to form a cycle, and the limit bounds any traversal of such a cycle.
    pub depth_limit: ConfigOption<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            atom_prefix: "A",
            formula_prefix: "F",
            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 1,
                max: usize::MAX,
                value: 1024,
            },
        }
    }
}
