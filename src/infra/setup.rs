use crate::{
    adapters::{http::app_state::AppState, persistence::postgrest::PostgrestConnector},
    infra::{
        InfraError,
        config::{AppConfig, EnvConfigSource},
        submission_gate::SubmissionGate,
    },
    use_cases::waitlist::WaitlistUseCases,
};
use std::{fs::File, path::Path, sync::Arc};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;

    let waitlist_use_cases = WaitlistUseCases::new(
        Arc::new(PostgrestConnector),
        Arc::new(EnvConfigSource),
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        submission_gate: Arc::new(SubmissionGate::new()),
    })
}

pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "zendit_web=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
