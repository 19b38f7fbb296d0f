use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use shared::ResetRequest;

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError};

/// Status and raw body of whatever the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
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
pub trait ResetTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        request: &ResetRequest,
    ) -> Result<TransportResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ResetTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &ResetRequest,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        // An error status is final on its own; its body is never read.
        if !response.status().is_success() {
            return Ok(TransportResponse::new(status, String::new()));
        }
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
