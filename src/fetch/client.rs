use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::HttpConfig;
use crate::fetch::error::FetchError;

/// Status and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Outbound HTTP capability used by the view.
///
/// Implementations only move bytes; status interpretation and decoding
/// happen in [`crate::fetch::fetch_items`].
#[async_trait]
pub trait HttpClient: Send + Sync + 'static {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

/// reqwest-backed client with a total request timeout.
pub struct ReqwestClient {
    client: Client,
    request_timeout: Duration,
}

impl ReqwestClient {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    async fn do_get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        match timeout(self.request_timeout, self.do_get(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}
