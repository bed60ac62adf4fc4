// Fetch-with-retry: fixed attempt count, fixed delay, every error retried alike
use crate::application::errors::FetchError;
use crate::application::transport::{HttpResponse, HttpTransport, Sleeper};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_API_ERROR: &str = "API returned an error";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_millis(5000),
        }
    }
}

#[derive(Clone)]
pub struct RetryingFetcher {
    transport: Arc<dyn HttpTransport>,
    sleeper: Arc<dyn Sleeper>,
    policy: RetryPolicy,
}

impl RetryingFetcher {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        sleeper: Arc<dyn Sleeper>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    /// GET `url` and return its JSON body, retrying up to `max_retries` times.
    /// The last failure is returned once retries run out.
    pub async fn fetch_with_retry(&self, url: &str) -> Result<Value, FetchError> {
        let mut retries_remaining = self.policy.max_retries;
        let mut attempt = 1u32;

        loop {
            match self.attempt(url).await {
                Ok(value) => {
                    tracing::debug!(url, attempt, "fetch succeeded");
                    return Ok(value);
                }
                Err(e) if retries_remaining > 0 => {
                    tracing::warn!(
                        url,
                        attempt,
                        retries_remaining,
                        error = %e,
                        "fetch failed, retrying in {:?}",
                        self.policy.delay
                    );
                    self.sleeper.sleep(self.policy.delay).await;
                    retries_remaining -= 1;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::debug!(url, attempt, error = %e, "fetch failed, no retries left");
                    return Err(e);
                }
            }
        }
    }

    async fn attempt(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.transport.get(url).await?;
        parse_response(response)
    }
}

/// Status check, JSON parse, then the application-level error flag
fn parse_response(response: HttpResponse) -> Result<Value, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Http {
            status: response.status,
        });
    }

    let value: Value =
        serde_json::from_slice(&response.body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if value.get("status").and_then(Value::as_str) == Some("error") {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_API_ERROR);
        return Err(FetchError::Api(message.to_string()));
    }

    Ok(value)
}
