//! Edda client core
//!
//! Shared GET-and-parse plumbing used by every service client: URL
//! assembly against the configured deployment, body deserialization, and
//! parse-error wrapping. Service clients compose this core rather than
//! talking to the transport directly.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use edda_domain::EddaConfig;

use crate::error::{ClientError, ClientResult};
use crate::ports::HttpClient;

/// Generic client for an Edda deployment.
#[derive(Debug, Clone)]
pub struct EddaClient<C> {
    config: EddaConfig,
    http: C,
}

impl<C: HttpClient> EddaClient<C> {
    /// Creates a client from a configuration and a transport.
    #[must_use]
    pub const fn new(config: EddaConfig, http: C) -> Self {
        Self { config, http }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &EddaConfig {
        &self.config
    }

    /// Builds the absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Issues a GET and parses the JSON body into `T`.
    ///
    /// Returns the parsed value together with the time the request was
    /// issued, so result envelopes can carry the original timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the request fails, or
    /// `ClientError::Parse` wrapping the deserialization failure and the
    /// URL that produced it. Failures are not retried.
    pub async fn get_parsed<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> ClientResult<(DateTime<Utc>, T)> {
        tracing::debug!(url, "issuing GET");
        let raw = self.http.get(url).await?;
        let parsed = serde_json::from_slice(&raw.body).map_err(|source| ClientError::Parse {
            url: url.to_string(),
            source,
        })?;
        Ok((raw.start_time, parsed))
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ports::{HttpClientError, RawResponse};

    struct FixedBody(&'static str);

    impl HttpClient for FixedBody {
        fn get(
            &self,
            _url: &str,
        ) -> impl Future<Output = Result<RawResponse, HttpClientError>> + Send {
            let start_time = Utc.with_ymd_and_hms(2014, 7, 1, 0, 0, 0).single();
            let response = start_time
                .map(|t| RawResponse::new(t, self.0.as_bytes().to_vec()))
                .ok_or_else(|| HttpClientError::Other("bad fixture time".to_string()));
            async move { response }
        }
    }

    #[tokio::test]
    async fn test_get_parsed_returns_start_time() {
        let client = EddaClient::new(EddaConfig::default(), FixedBody(r#"[1, 2, 3]"#));
        let (start_time, values): (_, Vec<u32>) = client
            .get_parsed("http://localhost:7001/api/v2/test")
            .await
            .expect("parse should succeed");
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(start_time.timestamp(), 1_404_172_800);
    }

    #[tokio::test]
    async fn test_get_parsed_wraps_parse_failure_with_url() {
        let client = EddaClient::new(EddaConfig::default(), FixedBody("not json"));
        let error = client
            .get_parsed::<Vec<u32>>("http://localhost:7001/api/v2/test")
            .await
            .expect_err("parse should fail");
        match error {
            ClientError::Parse { url, .. } => {
                assert_eq!(url, "http://localhost:7001/api/v2/test");
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_endpoint_uses_config() {
        let config = EddaConfig::new("http://edda.example.net:7001", "us-east-1");
        let client = EddaClient::new(config, FixedBody("[]"));
        assert_eq!(
            client.endpoint("/api/v2/aws/loadBalancers;_expand"),
            "http://edda.example.net:7001/api/v2/aws/loadBalancers;_expand"
        );
    }
}
