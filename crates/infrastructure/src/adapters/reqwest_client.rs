//! HTTP client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port for Edda's read-only
//! API: plain GET requests returning JSON. It stamps each request with a
//! start time from the configured clock so result envelopes can preserve
//! the original request timestamp.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use edda_application::ports::{Clock, HttpClient, HttpClientError, RawResponse};
use edda_domain::EddaConfig;

use super::system_clock::SystemClock;

/// HTTP transport backed by `reqwest::Client`.
pub struct ReqwestHttpClient {
    client: Client,
    clock: Box<dyn Clock>,
    timeout_ms: u64,
}

impl ReqwestHttpClient {
    /// Creates a transport with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::from_config(&EddaConfig::default())
    }

    /// Creates a transport using the timeout and user agent from an
    /// `EddaConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn from_config(config: &EddaConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            clock: Box::new(SystemClock::new()),
            timeout_ms: config.timeout_ms,
        })
    }

    /// Replaces the clock used to stamp request start times.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Maps reqwest errors to port-level `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str().map(ToString::to_string))
                .unwrap_or_else(|| "unknown".to_string());
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error.url().and_then(Url::port).unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: 10 };
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, HttpClientError>> + Send {
        let url = url.to_string();
        async move {
            let parsed =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let start_time = self.clock.now();

            let response = self
                .client
                .get(parsed)
                .header(ACCEPT, "application/json")
                .timeout(Duration::from_millis(self.timeout_ms))
                .send()
                .await
                .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(url, status = status.as_u16(), "unexpected status");
                return Err(HttpClientError::Status {
                    status: status.as_u16(),
                    url,
                });
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
                .to_vec();

            tracing::debug!(url, bytes = body.len(), "GET completed");
            Ok(RawResponse::new(start_time, body))
        }
    }
}
