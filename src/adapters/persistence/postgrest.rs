//! Waitlist store backed by a hosted PostgREST endpoint (Supabase REST API).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    domain::entities::{store_credentials::StoreCredentials, waitlist_entry::NewWaitlistEntry},
    infra::http_client::try_build_client,
    use_cases::waitlist::{StoreError, WaitlistStore, WaitlistStoreConnector},
};

pub const WAITLIST_TABLE: &str = "waitlist";

const REST_PATH: &str = "rest/v1";

#[derive(Clone)]
pub struct PostgrestWaitlistStore {
    client: Client,
    table_url: Url,
    anon_key: SecretString,
}

impl PostgrestWaitlistStore {
    pub fn new(client: Client, credentials: StoreCredentials) -> Result<Self, StoreError> {
        let table_url = table_url(&credentials.url, WAITLIST_TABLE)?;
        Ok(Self {
            client,
            table_url,
            anon_key: credentials.anon_key,
        })
    }
}

/// `{base}/rest/v1/{table}`, tolerating a base URL with or without a trailing slash.
fn table_url(base: &Url, table: &str) -> Result<Url, StoreError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("{REST_PATH}/{table}"))
        .map_err(|e| StoreError::Transport(format!("invalid store url: {e}")))
}

#[derive(Deserialize)]
struct PostgrestErrorBody {
    code: Option<String>,
    message: Option<String>,
    // Gateway-level errors (bad key, unknown route) use these instead.
    error: Option<String>,
    error_description: Option<String>,
}

#[async_trait]
impl WaitlistStore for PostgrestWaitlistStore {
    async fn insert(&self, entry: &NewWaitlistEntry<'_>) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.table_url.clone())
            .header("apikey", self.anon_key.expose_secret())
            .bearer_auth(self.anon_key.expose_secret())
            .header("Prefer", "return=minimal")
            .json(&[entry])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(format!("Failed to read response: {e}")))?;

        tracing::debug!(status = %status, body = %body, "PostgREST insert rejected");

        Err(rejection_from(status, &body))
    }
}

fn rejection_from(status: StatusCode, body: &str) -> StoreError {
    let Ok(parsed) = serde_json::from_str::<PostgrestErrorBody>(body) else {
        return StoreError::Transport(format!("unreadable error response ({status})"));
    };

    let message = parsed
        .message
        .or(parsed.error_description)
        .or(parsed.error);

    match message {
        Some(message) => StoreError::Rejected {
            code: parsed.code,
            message,
        },
        None => StoreError::Transport(format!("error response without message ({status})")),
    }
}

/// Builds one `PostgrestWaitlistStore` per submission.
#[derive(Default)]
pub struct PostgrestConnector;

impl WaitlistStoreConnector for PostgrestConnector {
    fn connect(&self, credentials: StoreCredentials) -> Result<Arc<dyn WaitlistStore>, StoreError> {
        let client = try_build_client().map_err(|e| StoreError::Transport(e.to_string()))?;
        let store = PostgrestWaitlistStore::new(client, credentials)?;
        Ok(Arc::new(store))
    }
}
