//! Environment-based configuration
//!
//! Reads `EDDA_*` variables into an `EddaConfig`. Unset variables keep
//! their defaults; a set-but-unparsable value is an error rather than a
//! silent fallback.

use edda_domain::{DomainError, DomainResult, EddaConfig};

/// Variable naming the Edda base URL (may contain `{region}`).
pub const ENV_BASE_URL: &str = "EDDA_BASE_URL";
/// Variable naming the region.
pub const ENV_REGION: &str = "EDDA_REGION";
/// Variable naming the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "EDDA_TIMEOUT_MS";

/// Builds an `EddaConfig` from the process environment.
///
/// # Errors
///
/// Returns `DomainError::InvalidParameter` if `EDDA_TIMEOUT_MS` is set
/// but not a number, or `DomainError::InvalidUrl` if the resolved base
/// URL does not parse.
pub fn config_from_env() -> DomainResult<EddaConfig> {
    config_from_vars(|name| std::env::var(name).ok())
}

/// Builds an `EddaConfig` from a variable lookup function.
///
/// # Errors
///
/// Same conditions as [`config_from_env`].
pub fn config_from_vars(
    lookup: impl Fn(&str) -> Option<String>,
) -> DomainResult<EddaConfig> {
    let mut config = EddaConfig::default();

    if let Some(base_url) = lookup(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(region) = lookup(ENV_REGION) {
        config.region = region;
    }
    if let Some(timeout) = lookup(ENV_TIMEOUT_MS) {
        config.timeout_ms = timeout.parse().map_err(|_| {
            DomainError::InvalidParameter(format!("{ENV_TIMEOUT_MS} must be a number: {timeout}"))
        })?;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from_vars(|_| None).expect("defaults are valid");
        assert_eq!(config, EddaConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let env = vars(&[
            (ENV_BASE_URL, "http://edda.{region}.example.net:7001"),
            (ENV_REGION, "eu-west-1"),
            (ENV_TIMEOUT_MS, "5000"),
        ]);
        let config = config_from_vars(|name| env.get(name).cloned()).expect("valid config");
        assert_eq!(config.url(), "http://edda.eu-west-1.example.net:7001");
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let env = vars(&[(ENV_TIMEOUT_MS, "soon")]);
        let error = config_from_vars(|name| env.get(name).cloned()).expect_err("must fail");
        assert!(matches!(error, DomainError::InvalidParameter(_)));
    }

    #[test]
    fn test_bad_base_url_is_an_error() {
        let env = vars(&[(ENV_BASE_URL, "not a url")]);
        let error = config_from_vars(|name| env.get(name).cloned()).expect_err("must fail");
        assert!(matches!(error, DomainError::InvalidUrl(_)));
    }
}
