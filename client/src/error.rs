use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Why a request produced no usable reply.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request could not be sent: {0}")]
    Send(String),
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Send(err.to_string())
        }
    }
}
