use std::process::ExitCode;

use client::{ClientConfig, FormResult, Navigator, Notifier, ResetClient, ResetForm, Route};
use shared::ResetRequest;
use tracing::error;

struct Terminal;

impl Notifier for Terminal {
    fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        println!("✗ {}", message);
    }
}

impl Navigator for Terminal {
    fn navigate(&self, route: Route) {
        println!("→ {}", route.path());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    client::logging::setup();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [otp, new_password, email] = args.as_slice() else {
        eprintln!("usage: reset-password <otp> <new-password> <email>");
        return ExitCode::from(2);
    };

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    let client = match ResetClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let form = ResetForm::new(client, Terminal, Terminal);
    match form
        .submit(ResetRequest::new(otp.as_str(), new_password.as_str(), email.as_str()))
        .await
    {
        FormResult::Invalid(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            ExitCode::from(2)
        }
        FormResult::Submitted(outcome) if outcome.is_accepted() => ExitCode::SUCCESS,
        FormResult::Submitted(_) => ExitCode::FAILURE,
    }
}
