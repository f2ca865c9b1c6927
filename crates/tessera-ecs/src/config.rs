//! Registry sizing configuration

use serde::{Deserialize, Serialize};

/// Sizing applied to every component store a [`crate::Registry`] creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum number of live components per component type.
    pub capacity: usize,
    /// Exclusive upper bound on entity ids. Defaults to `capacity` when unset.
    pub id_limit: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            id_limit: None,
        }
    }
}

impl RegistryConfig {
    /// Config where ids and live entries share the same bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            id_limit: None,
        }
    }

    /// Effective identifier bound.
    pub fn id_limit(&self) -> usize {
        self.id_limit.unwrap_or(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_limit_defaults_to_capacity() {
        let config = RegistryConfig::with_capacity(50);
        assert_eq!(config.id_limit(), 50);

        let wide = RegistryConfig {
            capacity: 12,
            id_limit: Some(24),
        };
        assert_eq!(wide.id_limit(), 24);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: RegistryConfig = toml::from_str("id_limit = 4096").unwrap();
        assert_eq!(config.capacity, 1024);
        assert_eq!(config.id_limit(), 4096);

        let empty: RegistryConfig = toml::from_str("").unwrap();
        assert_eq!(empty, RegistryConfig::default());
    }
}
