use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use crate::domain::entities::{
    store_credentials::StoreCredentials,
    submission_context::SubmissionContext,
    waitlist_entry::{NewWaitlistEntry, WaitlistEmail},
    waitlist_outcome::{UNIQUE_VIOLATION_CODE, WaitlistError, WaitlistOutcome},
};

/// Failure reported by a waitlist store on insert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered and refused the row.
    #[error("store rejected insert (code {code:?}): {message}")]
    Rejected {
        code: Option<String>,
        message: String,
    },

    /// No usable answer: connection failure, timeout, unreadable response.
    #[error("store request failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn insert(&self, entry: &NewWaitlistEntry<'_>) -> Result<(), StoreError>;
}

/// Builds a store client from validated credentials.
pub trait WaitlistStoreConnector: Send + Sync {
    fn connect(&self, credentials: StoreCredentials) -> Result<Arc<dyn WaitlistStore>, StoreError>;
}

/// Read access to configuration variables, consulted on every submission.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    connector: Arc<dyn WaitlistStoreConnector>,
    config: Arc<dyn ConfigSource>,
}

impl WaitlistUseCases {
    pub fn new(connector: Arc<dyn WaitlistStoreConnector>, config: Arc<dyn ConfigSource>) -> Self {
        Self { connector, config }
    }

    /// Validates the email, resolves credentials for `context` and performs the
    /// insert. Never returns an error: every failure is folded into the outcome.
    #[instrument(skip(self, email, context), fields(context = context.as_str()))]
    pub async fn join(&self, context: SubmissionContext, email: &str) -> WaitlistOutcome {
        let email = match WaitlistEmail::parse(email) {
            Ok(email) => email,
            Err(err) => return WaitlistOutcome::Failed(err),
        };

        let Some(credentials) =
            StoreCredentials::resolve(|key| self.config.get(key), context.credential_names())
        else {
            tracing::error!("Waitlist store credentials are not configured");
            return WaitlistOutcome::Failed(WaitlistError::ConfigurationMissing);
        };

        let store = match self.connector.connect(credentials) {
            Ok(store) => store,
            Err(err) => {
                tracing::error!(error = %err, "Failed to build waitlist store client");
                return WaitlistOutcome::Failed(WaitlistError::Unexpected);
            }
        };

        join_waitlist(store.as_ref(), &email).await
    }
}

/// Inserts one entry and classifies the store's answer.
pub async fn join_waitlist(store: &dyn WaitlistStore, email: &WaitlistEmail) -> WaitlistOutcome {
    let result = store.insert(&NewWaitlistEntry::from(email)).await;

    match &result {
        Ok(()) => tracing::info!("Waitlist entry created"),
        Err(StoreError::Rejected { code, .. }) if code.as_deref() == Some(UNIQUE_VIOLATION_CODE) => {
            tracing::debug!("Email already on the waitlist")
        }
        Err(err @ StoreError::Rejected { .. }) => {
            tracing::warn!(error = %err, "Waitlist store rejected entry")
        }
        Err(err @ StoreError::Transport(_)) => {
            tracing::error!(error = %err, "Waitlist store unreachable")
        }
    }

    classify_insert(result)
}

pub fn classify_insert(result: Result<(), StoreError>) -> WaitlistOutcome {
    match result {
        Ok(()) => WaitlistOutcome::Joined,
        Err(StoreError::Rejected { code, .. }) if code.as_deref() == Some(UNIQUE_VIOLATION_CODE) => {
            WaitlistOutcome::AlreadyRegistered
        }
        Err(StoreError::Rejected { message, .. }) => {
            WaitlistOutcome::Failed(WaitlistError::Store(message))
        }
        Err(StoreError::Transport(_)) => WaitlistOutcome::Failed(WaitlistError::Unexpected),
    }
}
