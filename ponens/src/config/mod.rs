/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and the oracle of a context copies what it needs on creation.

Each value is a [ConfigOption], which pairs the value with a name and bounds for use when setting the option from some external source.

```rust
# use ponens::config::{Config, Novelty};
let mut config = Config::default();

assert!(config.variable_limit.set(12));
assert!(!config.variable_limit.set(64));
assert_eq!(config.variable_limit.value, 12);

config.novelty.value = Novelty::Entailment;
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod novelty;
pub use novelty::Novelty;

/// The most distinct variables which may be enumerated, regardless of configuration.
pub const VARIABLE_LIMIT_MAX: usize = 30;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The most distinct variables the oracle will enumerate assignments over.
    pub variable_limit: ConfigOption<usize>,

    /// When a told formula is already known.
    pub novelty: ConfigOption<Novelty>,

    /// Drop clauses which contain some literal and its negation when normalising.
    pub tautology_elimination: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variable_limit: ConfigOption {
                name: "variable_limit",
                min: 0,
                max: VARIABLE_LIMIT_MAX,
                value: 20,
            },

            novelty: ConfigOption {
                name: "novelty",
                min: Novelty::MIN,
                max: Novelty::MAX,
                value: Novelty::Equivalence,
            },

            tautology_elimination: ConfigOption {
                name: "tautology_elimination",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
