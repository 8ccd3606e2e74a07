//! Client settings

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Configuration for connecting to an Edda deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EddaConfig {
    /// Base URL of the Edda service. A literal `{region}` placeholder is
    /// replaced with the configured region.
    pub base_url: String,
    /// Region the target deployment serves.
    pub region: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for EddaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:7001".to_string(),
            region: "us-east-1".to_string(),
            timeout_ms: 30_000,
            user_agent: concat!("edda-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl EddaConfig {
    /// Creates a configuration for the given base URL and region.
    #[must_use]
    pub fn new(base_url: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the User-Agent header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the resolved service URL: region substituted, trailing
    /// slash trimmed.
    #[must_use]
    pub fn url(&self) -> String {
        self.base_url
            .replace("{region}", &self.region)
            .trim_end_matches('/')
            .to_string()
    }

    /// Joins an API path onto the resolved service URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.url())
    }

    /// Checks that the resolved service URL parses as an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if it does not.
    pub fn validate(&self) -> DomainResult<()> {
        let url = self.url();
        Url::parse(&url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {url}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_region_substitution() {
        let config = EddaConfig::new("http://edda.{region}.example.net:7001", "eu-west-1");
        assert_eq!(config.url(), "http://edda.eu-west-1.example.net:7001");
    }

    #[test]
    fn test_endpoint_join_trims_trailing_slash() {
        let config = EddaConfig::new("http://edda.example.net:7001/", "us-east-1");
        assert_eq!(
            config.endpoint("/api/v2/aws/loadBalancers;_expand"),
            "http://edda.example.net:7001/api/v2/aws/loadBalancers;_expand"
        );
    }

    #[test]
    fn test_validate() {
        assert!(EddaConfig::default().validate().is_ok());

        let bad = EddaConfig::new("not a url", "us-east-1");
        assert!(matches!(bad.validate(), Err(DomainError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_methods() {
        let config = EddaConfig::default()
            .with_timeout_ms(5_000)
            .with_user_agent("test-agent");
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.user_agent, "test-agent");
    }
}
