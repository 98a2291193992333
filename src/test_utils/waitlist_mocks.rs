//! In-memory waitlist store, connector and configuration mocks.

use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{
    domain::entities::{
        store_credentials::StoreCredentials,
        submission_context::{
            FALLBACK_KEY_VAR, PRIMARY_KEY_VAR, PRIMARY_URL_VAR, SERVER_FALLBACK_URL_VAR,
        },
        waitlist_entry::NewWaitlistEntry,
        waitlist_outcome::UNIQUE_VIOLATION_CODE,
    },
    use_cases::waitlist::{ConfigSource, StoreError, WaitlistStore, WaitlistStoreConnector},
};

// ============================================================================
// Stores
// ============================================================================

/// Store that enforces email uniqueness the way the hosted table does.
#[derive(Default)]
pub struct InMemoryWaitlistStore {
    emails: Mutex<Vec<String>>,
}

impl InMemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emails(emails: &[&str]) -> Self {
        Self {
            emails: Mutex::new(emails.iter().map(|e| e.to_string()).collect()),
        }
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    async fn insert(&self, entry: &NewWaitlistEntry<'_>) -> Result<(), StoreError> {
        let mut emails = self.emails.lock().unwrap();
        if emails.iter().any(|e| e == entry.email) {
            return Err(StoreError::Rejected {
                code: Some(UNIQUE_VIOLATION_CODE.to_string()),
                message: "duplicate key value violates unique constraint \"waitlist_email_key\""
                    .to_string(),
            });
        }
        emails.push(entry.email.to_string());
        Ok(())
    }
}

/// Store that fails every insert with the configured error.
pub struct FailingWaitlistStore {
    error: StoreError,
}

impl FailingWaitlistStore {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl WaitlistStore for FailingWaitlistStore {
    async fn insert(&self, _entry: &NewWaitlistEntry<'_>) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}

/// Store whose inserts park until `release()` is called. Used to hold a
/// submission in flight.
#[derive(Default)]
pub struct BlockingWaitlistStore {
    inner: InMemoryWaitlistStore,
    entered: Notify,
    release: Notify,
}

impl BlockingWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves once an insert is waiting.
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn emails(&self) -> Vec<String> {
        self.inner.emails()
    }
}

#[async_trait]
impl WaitlistStore for BlockingWaitlistStore {
    async fn insert(&self, entry: &NewWaitlistEntry<'_>) -> Result<(), StoreError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.insert(entry).await
    }
}

// ============================================================================
// Connector
// ============================================================================

/// Connector that hands out a shared store and records every connect call.
pub struct RecordingConnector {
    store: Option<Arc<dyn WaitlistStore>>,
    connects: AtomicUsize,
    last_url: Mutex<Option<String>>,
}

impl RecordingConnector {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self {
            store: Some(store),
            connects: AtomicUsize::new(0),
            last_url: Mutex::new(None),
        }
    }

    /// Connector whose client construction always fails.
    pub fn refusing() -> Self {
        Self {
            store: None,
            connects: AtomicUsize::new(0),
            last_url: Mutex::new(None),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }
}

impl WaitlistStoreConnector for RecordingConnector {
    fn connect(&self, credentials: StoreCredentials) -> Result<Arc<dyn WaitlistStore>, StoreError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(credentials.url.to_string());
        self.store
            .clone()
            .ok_or_else(|| StoreError::Transport("client construction failed".to_string()))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration backed by a fixed map.
#[derive(Default)]
pub struct MapConfigSource {
    vars: HashMap<String, String>,
}

impl MapConfigSource {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Both primary variables set.
    pub fn configured() -> Self {
        Self::empty()
            .with(PRIMARY_URL_VAR, "https://primary.supabase.test")
            .with(PRIMARY_KEY_VAR, "test-anon-key")
    }

    /// Only the server-visible fallback URL and the fallback key set.
    pub fn server_fallback_only() -> Self {
        Self::empty()
            .with(SERVER_FALLBACK_URL_VAR, "https://fallback.supabase.test")
            .with(FALLBACK_KEY_VAR, "fallback-anon-key")
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for MapConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
