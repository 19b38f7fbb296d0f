use std::sync::Arc;

use shared::constants::{NETWORK_ERROR, REQUEST_FAILED_ERROR};
use shared::{ResetRequest, ResetResponse};
use tracing::{debug, error, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError};
use crate::transport::{HttpTransport, ResetTransport, TransportResponse};

/// How a single reset attempt ended. Every variant is final for the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(String),
    Rejected(String),
    RequestFailed,
    NetworkError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Accepted(message) | Self::Rejected(message) => message,
            Self::RequestFailed => REQUEST_FAILED_ERROR,
            Self::NetworkError => NETWORK_ERROR,
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            Self::Accepted(message) => Notification::Success(message.clone()),
            other => Notification::Error(other.message().to_string()),
        }
    }

    /// Maps what the transport produced onto an outcome.
    pub fn from_transport(result: Result<TransportResponse, TransportError>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!("password reset request failed: {}", e);
                return Self::NetworkError;
            }
        };

        if !response.is_success() {
            warn!(status = response.status, "password reset endpoint returned an error status");
            return Self::RequestFailed;
        }

        match serde_json::from_str::<ResetResponse>(&response.body) {
            Ok(reply) if reply.is_rejection() => Self::Rejected(reply.message),
            Ok(reply) => Self::Accepted(reply.message),
            Err(e) => {
                error!("password reset reply was not valid json: {}", e);
                Self::NetworkError
            }
        }
    }
}

/// Sends reset requests to the configured endpoint. Clones share the
/// underlying transport.
pub struct ResetClient<T = HttpTransport> {
    transport: Arc<T>,
    url: String,
}

impl<T> Clone for ResetClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            url: self.url.clone(),
        }
    }
}

impl ResetClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(config, HttpTransport::new(config)?))
    }
}

impl<T: ResetTransport> ResetClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            url: config.reset_password_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One POST, no retries. The request is not checked here; callers that
    /// take user input go through [`crate::form::ResetForm`].
    pub async fn submit(&self, request: &ResetRequest) -> Outcome {
        debug!(email = %request.email, url = %self.url, "sending password reset");
        let outcome = Outcome::from_transport(self.transport.post_json(&self.url, request).await);
        match &outcome {
            Outcome::Accepted(_) => info!(email = %request.email, "password reset accepted"),
            Outcome::Rejected(message) => {
                warn!(email = %request.email, reason = %message, "password reset rejected")
            }
            _ => {}
        }
        outcome
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    pub(crate) enum Reply {
        Respond(u16, &'static str),
        Unreachable,
    }

    pub(crate) struct FakeTransport {
        reply: Reply,
        pub(crate) calls: Mutex<Vec<(String, ResetRequest)>>,
    }

    impl FakeTransport {
        pub(crate) fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ResetTransport for FakeTransport {
        async fn post_json(
            &self,
            url: &str,
            request: &ResetRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), request.clone()));
            match self.reply {
                Reply::Respond(status, body) => Ok(TransportResponse::new(status, body)),
                Reply::Unreachable => Err(TransportError::Send("connection refused".into())),
            }
        }
    }

    fn request() -> ResetRequest {
        ResetRequest::new("123456", "Abcdef1!", "a@b.com")
    }

    async fn submit_with(reply: Reply) -> Outcome {
        let client = ResetClient::with_transport(&ClientConfig::default(), FakeTransport::new(reply));
        client.submit(&request()).await
    }

    #[tokio::test]
    async fn test_backend_rejection_keeps_server_message() {
        let outcome = submit_with(Reply::Respond(
            200,
            r#"{"success":false,"message":"Invalid OTP"}"#,
        ))
        .await;
        assert_eq!(outcome, Outcome::Rejected("Invalid OTP".into()));
        assert_eq!(outcome.notification(), Notification::Error("Invalid OTP".into()));
    }

    #[tokio::test]
    async fn test_backend_success_is_accepted() {
        let outcome = submit_with(Reply::Respond(
            200,
            r#"{"success":true,"message":"Password reset"}"#,
        ))
        .await;
        assert_eq!(outcome, Outcome::Accepted("Password reset".into()));
        assert_eq!(outcome.notification(), Notification::Success("Password reset".into()));
    }

    #[tokio::test]
    async fn test_missing_success_flag_is_not_a_rejection() {
        let outcome = submit_with(Reply::Respond(201, r#"{"message":"done"}"#)).await;
        assert_eq!(outcome, Outcome::Accepted("done".into()));
    }

    #[tokio::test]
    async fn test_error_status_is_request_failed() {
        for status in [400, 404, 500, 503] {
            let outcome = submit_with(Reply::Respond(
                status,
                r#"{"success":false,"message":"ignored"}"#,
            ))
            .await;
            assert_eq!(outcome, Outcome::RequestFailed, "status {status}");
            assert_eq!(outcome.message(), REQUEST_FAILED_ERROR);
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let outcome = submit_with(Reply::Unreachable).await;
        assert_eq!(outcome, Outcome::NetworkError);
        assert_eq!(outcome.notification(), Notification::Error(NETWORK_ERROR.into()));
    }

    #[tokio::test]
    async fn test_garbled_success_body_is_network_error() {
        let outcome = submit_with(Reply::Respond(200, "<html>oops</html>")).await;
        assert_eq!(outcome, Outcome::NetworkError);
    }

    #[test]
    fn test_loosely_typed_success_body_is_still_interpreted() {
        let outcome = |body: &str| Outcome::from_transport(Ok(TransportResponse::new(200, body)));

        assert_eq!(
            outcome(r#"{"success":false,"message":null}"#),
            Outcome::Rejected(String::new())
        );
        assert_eq!(
            outcome(r#"{"success":true,"message":null}"#),
            Outcome::Accepted(String::new())
        );
        assert_eq!(
            outcome(r#"{"success":"false","message":"x"}"#),
            Outcome::Accepted("x".into())
        );
        assert_eq!(
            outcome(r#"{"success":false,"message":404}"#),
            Outcome::Rejected("404".into())
        );
    }

    #[tokio::test]
    async fn test_posts_once_to_reset_endpoint() {
        let config = ClientConfig::new("https://auth.example.com/");
        let client = ResetClient::with_transport(
            &config,
            FakeTransport::new(Reply::Respond(200, r#"{"success":true,"message":"ok"}"#)),
        );
        client.submit(&request()).await;

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(client.url(), "https://auth.example.com/user/reset-password/reset-password");
        assert_eq!(calls[0].0, client.url());
        assert_eq!(calls[0].1, request());
    }
}
