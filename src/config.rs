//! Connection settings for the Temporal backend
//!
//! Read once from the environment at startup:
//! - `TEMPORAL_ADDRESS` (default `localhost:7233`)
//! - `TEMPORAL_NAMESPACE` (default `default`)

/// Configuration for the Temporal MCP server
#[derive(Clone, Debug)]
pub struct TemporalConfig {
    /// Temporal frontend address (host:port, optionally with scheme)
    pub address: String,
    /// Namespace scoping which executions queries can see
    pub namespace: String,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            address: "localhost:7233".to_string(),
            namespace: "default".to_string(),
        }
    }
}

impl TemporalConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("TEMPORAL_ADDRESS").ok(),
            std::env::var("TEMPORAL_NAMESPACE").ok(),
        )
    }

    /// Apply overrides on top of the defaults; blank values are ignored.
    pub fn resolve(address: Option<String>, namespace: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(address) = address.filter(|a| !a.trim().is_empty()) {
            config.address = address;
        }
        if let Some(namespace) = namespace.filter(|n| !n.trim().is_empty()) {
            config.namespace = namespace;
        }

        config
    }

    /// Base URL for the Temporal server HTTP API.
    pub fn base_url(&self) -> String {
        if self.address.starts_with("http://") || self.address.starts_with("https://") {
            self.address.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", self.address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TemporalConfig::default();
        assert_eq!(config.address, "localhost:7233");
        assert_eq!(config.namespace, "default");
    }

    #[test]
    fn test_resolve_overrides() {
        let config = TemporalConfig::resolve(
            Some("temporal.internal:7233".to_string()),
            Some("payments".to_string()),
        );
        assert_eq!(config.address, "temporal.internal:7233");
        assert_eq!(config.namespace, "payments");
    }

    #[test]
    fn test_resolve_ignores_blank_values() {
        let config = TemporalConfig::resolve(Some("".to_string()), Some("  ".to_string()));
        assert_eq!(config.address, "localhost:7233");
        assert_eq!(config.namespace, "default");
    }

    #[test]
    fn test_base_url_adds_scheme() {
        let config = TemporalConfig::default();
        assert_eq!(config.base_url(), "http://localhost:7233");

        let config = TemporalConfig::resolve(Some("https://temporal.example.com/".to_string()), None);
        assert_eq!(config.base_url(), "https://temporal.example.com");
    }
}
