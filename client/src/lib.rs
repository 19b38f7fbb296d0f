//! Client side of the password reset flow: check the form, post it to the
//! reset service, and turn the reply into a notification and, on success,
//! a redirect to sign-in.

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod submit;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, TransportError};
pub use form::{FormResult, Navigator, Notifier, ResetForm, Route};
pub use submit::{Notification, Outcome, ResetClient};
pub use transport::{HttpTransport, ResetTransport, TransportResponse};
