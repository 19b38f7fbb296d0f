use shared::constants::SIGN_IN_ROUTE;
use shared::validation::{validate, FieldErrors, ValidationResult};
use shared::ResetRequest;
use tracing::debug;

use crate::submit::{Notification, Outcome, ResetClient};
use crate::transport::{HttpTransport, ResetTransport};

/// Shows a transient message to the user.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);

    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::Success(message) => self.success(message),
            Notification::Error(message) => self.error(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => SIGN_IN_ROUTE,
        }
    }
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult {
    /// Nothing was sent; the messages belong next to their fields.
    Invalid(FieldErrors),
    Submitted(Outcome),
}

/// The reset form's submit handler: validate, send, notify, redirect.
pub struct ResetForm<N, V, T = HttpTransport> {
    client: ResetClient<T>,
    notifier: N,
    navigator: V,
}

impl<N, V, T> ResetForm<N, V, T>
where
    N: Notifier,
    V: Navigator,
    T: ResetTransport,
{
    pub fn new(client: ResetClient<T>, notifier: N, navigator: V) -> Self {
        Self {
            client,
            notifier,
            navigator,
        }
    }

    pub async fn submit(&self, request: ResetRequest) -> FormResult {
        if let ValidationResult::Invalid(errors) = validate(&request) {
            debug!(fields = errors.len(), "reset form has invalid fields");
            return FormResult::Invalid(errors);
        }

        let outcome = self.client.submit(&request).await;
        self.notifier.notify(&outcome.notification());
        if outcome.is_accepted() {
            self.navigator.navigate(Route::SignIn);
        }
        FormResult::Submitted(outcome)
    }
}
