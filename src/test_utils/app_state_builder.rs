//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` wires an `AppState` around an in-memory store and a
//! map-backed configuration, so routes run without any network access.

use std::{net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, submission_gate::SubmissionGate},
    test_utils::{InMemoryWaitlistStore, MapConfigSource, RecordingConnector},
    use_cases::waitlist::{WaitlistStore, WaitlistUseCases},
};

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        log_file: None,
    }
}

/// Builder for `AppState` with configurable mocks.
///
/// Defaults to an empty `InMemoryWaitlistStore` and `MapConfigSource::configured()`.
pub struct TestAppStateBuilder {
    store: Arc<dyn WaitlistStore>,
    config: MapConfigSource,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryWaitlistStore::new()),
            config: MapConfigSource::configured(),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn WaitlistStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_config(mut self, config: MapConfigSource) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> AppState {
        self.build_with_connector().0
    }

    /// Also returns the connector so tests can inspect how often the store
    /// was reached and with which URL.
    pub fn build_with_connector(self) -> (AppState, Arc<RecordingConnector>) {
        let connector = Arc::new(RecordingConnector::new(self.store));
        let use_cases = WaitlistUseCases::new(connector.clone(), Arc::new(self.config));

        let app_state = AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases: Arc::new(use_cases),
            submission_gate: Arc::new(SubmissionGate::new()),
        };

        (app_state, connector)
    }
}
