// Seams for the network call and the retry delay
use crate::application::errors::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// Raw result of a single GET
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one GET; only connection-level failures are errors here
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
