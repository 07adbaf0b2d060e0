use crate::{config::Config, oracle::Enumeration};

use super::GenericContext;

/// A context which decides satisfiability by [enumeration](Enumeration).
pub type Context = GenericContext<Enumeration>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        let oracle = Enumeration::from_config(&config);
        GenericContext::from_parts(config, oracle)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
