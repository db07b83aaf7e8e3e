//! Dispatcher configuration

use serde::Deserialize;

/// Configuration for the lead dispatcher
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Bounded queue capacity; enqueue drops when full
    pub queue_capacity: usize,
    /// Prefix prepended to lead subjects, e.g. a site identifier
    pub subject_prefix: Option<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 256,
            subject_prefix: None,
        }
    }
}

impl DispatchConfig {
    /// Loads configuration from `LEAD_`-prefixed environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("queue_capacity", 256i64)?
            .add_source(config::Environment::with_prefix("LEAD"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DispatchConfig::default();
        assert_eq!(cfg.queue_capacity, 256);
        assert!(cfg.subject_prefix.is_none());
    }
}
