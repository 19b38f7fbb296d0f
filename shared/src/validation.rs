use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::*;
use crate::password_reset::ResetRequest;

static OTP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]{{{OTP_LENGTH}}}$")).expect("otp pattern is valid")
});
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if otp.is_empty() {
        return Err(error("required", OTP_REQUIRED_ERROR));
    }
    if !OTP_REGEX.is_match(otp) {
        return Err(error("invalid_otp", INVALID_OTP_ERROR));
    }
    Ok(())
}

fn is_password_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(c)
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(error("required", PASSWORD_REQUIRED_ERROR));
    }
    // Length in UTF-16 code units, the way the browser form counts it.
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(error("password_too_short", PASSWORD_TOO_SHORT_ERROR));
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(is_password_symbol);
    let allowed_only = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_password_symbol(c));

    if !has_uppercase
        || !has_lowercase
        || !has_digit
        || !has_special
        || !allowed_only {
        return Err(error("invalid_password", INVALID_PASSWORD_ERROR));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(error("required", EMAIL_REQUIRED_ERROR));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(error("invalid_email_format", INVALID_EMAIL_ERROR));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Otp,
    NewPassword,
    Email,
}

impl Field {
    /// Name the field carries on the wire and in the form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Otp => "otp",
            Self::NewPassword => "newPassword",
            Self::Email => "email",
        }
    }

    fn from_struct_field(name: &str) -> Option<Self> {
        match name {
            "otp" => Some(Self::Otp),
            "new_password" | "newPassword" => Some(Self::NewPassword),
            "email" => Some(Self::Email),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One message per failing field, the first rule that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (name, field_errors) in errors.field_errors() {
            let (Some(field), Some(first)) = (Field::from_struct_field(name), field_errors.first())
            else {
                continue;
            };
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            map.insert(field, message);
        }
        Self(map)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Checks every field of the request and reports all failing fields at once.
pub fn validate(request: &ResetRequest) -> ValidationResult {
    match request.validate() {
        Ok(()) => ValidationResult::Valid,
        Err(errors) => ValidationResult::Invalid(FieldErrors::from(&errors)),
    }
}
