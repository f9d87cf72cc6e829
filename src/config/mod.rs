/*!
Configuration of a registry, and anything built around a registry.

All configuration is contained within [Config].
Databases clone the part of the configuration relevant to them on creation, e.g. a [Registry](crate::db::registry::Registry) holds a [RegistryConfig](dbs::RegistryConfig).

```rust
# use otter_logic::config::Config;
# use otter_logic::db::registry::Registry;
let mut config = Config::default();
assert!(config.registry.depth_limit.set(64));

let registry = Registry::from_config(&config);
assert_eq!(registry.config.depth_limit.value, 64);
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;

use dbs::RegistryConfig;

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Configuration of the registry.
    pub registry: RegistryConfig,
}
