use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;
use crate::validation::*;

/// Body of `POST /user/reset-password/reset-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    #[validate(custom = "validate_otp")]
    pub otp: String,
    #[validate(custom = "validate_password")]
    pub new_password: String,
    #[validate(custom = "validate_email")]
    pub email: String,
}

impl ResetRequest {
    pub fn new(
        otp: impl Into<String>,
        new_password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            otp: otp.into(),
            new_password: new_password.into(),
            email: email.into(),
        }
    }
}

/// Reply from the reset service. Only an explicit `"success": false` counts
/// as a rejection; fields of an unexpected type never fail the decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    #[serde(default, deserialize_with = "lenient_success")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: String,
}

fn lenient_success<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Some(flag),
        _ => None,
    })
}

fn lenient_message<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(message) => message,
        other => other.to_string(),
    })
}

impl ResetResponse {
    pub fn is_rejection(&self) -> bool {
        self.success == Some(false)
    }
}
