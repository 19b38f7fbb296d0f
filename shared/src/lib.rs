//! Types and checks shared by everything that talks to the password reset
//! service. Nothing in here touches the network, so the crate builds for
//! native and wasm targets alike.

pub mod constants;
pub mod password_reset;
pub mod validation;

pub use password_reset::{ResetRequest, ResetResponse};
pub use validation::{validate, Field, FieldErrors, ValidationResult};
