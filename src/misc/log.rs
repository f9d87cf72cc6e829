/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [registry](crate::db::registry)
    pub const REGISTRY: &str = "registry";

    /// Logs related to [simplification](crate::procedures::simplify)
    pub const SIMPLIFY: &str = "simplify";

    /// Logs related to [interpretations](crate::interpretation)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [assignments](crate::structures::assignment)
    pub const ASSIGNMENT: &str = "assignment";

    /// Logs related to the [world database](crate::world)
    pub const WORLD: &str = "world";
}
