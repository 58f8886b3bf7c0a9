use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config::StoreSettings;
use crate::domain::SignupRecord;

/// Postgres error code for a unique-constraint violation. The conflict
/// branch dispatches on this code, never on message text.
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

pub const WAITLIST_TABLE: &str = "waitlist_signups";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store reached us and said no. `code` is the store-reported error
    /// code, empty when the response body was not the expected shape.
    #[error("store rejected the insert ({code}): {message}")]
    Rejected { code: String, message: String },
    /// The request never produced a store response.
    #[error("store request failed: {0}")]
    Transport(String),
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::Rejected { code, .. } if code == UNIQUE_VIOLATION_CODE)
    }
}

/// The single capability the submission flow needs from the outside world.
/// Swapped for an in-memory fake in tests.
#[allow(async_fn_in_trait)]
pub trait WaitlistStore {
    async fn insert(&self, records: &[SignupRecord]) -> Result<Vec<SignupRecord>, StoreError>;
}

/// Supabase-hosted waitlist store, reached through its PostgREST surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseStore {
    rest_url: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(settings: &StoreSettings) -> Self {
        Self {
            rest_url: rest_url(&settings.url, WAITLIST_TABLE),
            anon_key: settings.anon_key.clone(),
        }
    }
}

impl WaitlistStore for SupabaseStore {
    async fn insert(&self, records: &[SignupRecord]) -> Result<Vec<SignupRecord>, StoreError> {
        let response = Request::post(&self.rest_url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=representation")
            .json(records)
            .map_err(|e| StoreError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if response.ok() {
            response
                .json::<Vec<SignupRecord>>()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(parse_rejection(status, &body))
        }
    }
}

fn rest_url(base: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base.trim_end_matches('/'), table)
}

/// PostgREST reports errors as a JSON object carrying a Postgres error code.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

fn parse_rejection(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => StoreError::Rejected {
            code: err.code.unwrap_or_default(),
            message: err
                .message
                .unwrap_or_else(|| format!("insert failed with status {status}")),
        },
        Err(_) => StoreError::Rejected {
            code: String::new(),
            message: format!("insert failed with status {status}"),
        },
    }
}
