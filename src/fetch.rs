//! Fetching expvar documents over HTTP.
//!
//! One shared [`reqwest::Client`] with a bounded timeout performs the
//! per-target GETs. Fetching never mutates target state; the parsed
//! tree (or a typed error) is handed back to the polling scheduler,
//! which is the sole state mutator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while fetching an expvar document.
///
/// None of these is fatal: the scheduler maps them onto the owning
/// target's status and retries on the next round.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint returned 404: the process is up but does not
    /// expose introspection at this path.
    #[error("vars not found (did you import expvar?)")]
    VarsNotFound,

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other non-success HTTP response or transport error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The body was not valid JSON.
    #[error("malformed document: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

/// Source of expvar documents.
///
/// The HTTP client implements this for real targets; tests script it
/// to exercise the scheduler without a network.
#[async_trait]
pub trait ExpvarSource: Send + Sync {
    /// Fetch and parse the introspection document at `url`.
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// HTTP expvar fetcher with a per-request timeout.
#[derive(Debug, Clone)]
pub struct ExpvarClient {
    client: Client,
}

impl ExpvarClient {
    /// Build a client whose requests (connect included) are bounded
    /// by `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ExpvarSource for ExpvarClient {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::VarsNotFound);
        }
        if !response.status().is_success() {
            return Err(FetchError::Http(format!(
                "endpoint returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::VarsNotFound.to_string(),
            "vars not found (did you import expvar?)"
        );
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert!(FetchError::Malformed("eof".into()).to_string().contains("eof"));
    }
}
