//! Hosted store client for fetching ledger snapshots
//!
//! Talks to the store's PostgREST endpoint (`/rest/v1/{table}`). The store
//! owns persistence, authentication and row-level security; this client only
//! reads.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::error::{AppError, AppResult};
use crate::models::{
    AdvanceRow, Contractor, EmployeeRow, EntrepreneurRow, Harvest, HarvestRow, LedgerSnapshot,
    MarketSettings, ProfileRow, RainEvent, SettingsRow, UserProfile, WorkTask, WorkTaskRow,
    Worker,
};

const BY_NAME: &str = "select=*&order=name.asc";
const NEWEST_FIRST: &str = "select=*&order=date.desc";
const SETTINGS_ROW: &str = "select=*&limit=1";

/// Hosted store client
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl StoreClient {
    /// Create a new StoreClient from configuration
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        if config.url.trim().is_empty() {
            return Err(AppError::Configuration("store.url is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every table and assemble one snapshot.
    ///
    /// Tables are requested concurrently. Workers, harvests, tasks and
    /// advances are required. The other tables fall back to defaults or an
    /// empty list when they cannot be read.
    pub async fn fetch_snapshot(&self) -> AppResult<LedgerSnapshot> {
        let (employees, entrepreneurs, harvests, advances, tasks, rain_events, settings, profiles) = tokio::join!(
            self.fetch_table::<EmployeeRow>("employees", BY_NAME),
            self.fetch_table::<EntrepreneurRow>("entrepreneurs", BY_NAME),
            self.fetch_table::<HarvestRow>("harvests", NEWEST_FIRST),
            self.fetch_table::<AdvanceRow>("advances", NEWEST_FIRST),
            self.fetch_table::<WorkTaskRow>("work_tasks", NEWEST_FIRST),
            self.fetch_table::<RainEvent>("rain_events", NEWEST_FIRST),
            self.fetch_table::<SettingsRow>("settings", SETTINGS_ROW),
            self.fetch_table::<ProfileRow>("profiles", "select=*"),
        );

        let mut skipped_advances = 0usize;
        let advances: Vec<_> = advances?
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                let advance = row.into_advance();
                if advance.is_none() {
                    tracing::warn!(advance_id = %id, "Skipping advance without worker or contractor");
                    skipped_advances += 1;
                }
                advance
            })
            .collect();

        let settings = settings_or_default(settings);

        let profiles = or_empty("profiles", profiles)
            .into_iter()
            .map(UserProfile::from)
            .collect();
        let contractors = or_empty("entrepreneurs", entrepreneurs)
            .into_iter()
            .map(Contractor::from)
            .collect();

        let snapshot = LedgerSnapshot {
            workers: employees?.into_iter().map(Worker::from).collect(),
            contractors,
            harvests: harvests?.into_iter().map(Harvest::from).collect(),
            tasks: tasks?.into_iter().map(WorkTask::from).collect(),
            advances,
            rain_events: or_empty("rain_events", rain_events),
            settings,
            profiles,
        };

        tracing::debug!(
            workers = snapshot.workers.len(),
            harvests = snapshot.harvests.len(),
            tasks = snapshot.tasks.len(),
            advances = snapshot.advances.len(),
            skipped_advances,
            "Fetched ledger snapshot"
        );

        Ok(snapshot)
    }

    /// Read only the market settings, falling back to defaults
    pub async fn fetch_settings(&self) -> MarketSettings {
        settings_or_default(self.fetch_table("settings", SETTINGS_ROW).await)
    }

    /// Check that the store answers at all
    pub async fn ping(&self) -> bool {
        self.fetch_table::<serde_json::Value>("settings", SETTINGS_ROW)
            .await
            .is_ok()
    }

    async fn fetch_table<T: DeserializeOwned>(&self, table: &str, query: &str) -> AppResult<Vec<T>> {
        let url = format!("{}/rest/v1/{}?{}", self.base_url, table, query);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("{} request failed: {}", table, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StoreUnavailable(format!(
                "{} returned {} - {}",
                table, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to parse {} rows: {}", table, e)))
    }
}

fn settings_or_default(rows: AppResult<Vec<SettingsRow>>) -> MarketSettings {
    match rows {
        Ok(rows) => rows
            .into_iter()
            .next()
            .map(MarketSettings::from)
            .unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Settings unavailable, using defaults: {}", e);
            MarketSettings::default()
        }
    }
}

fn or_empty<T>(table: &str, rows: AppResult<Vec<T>>) -> Vec<T> {
    rows.unwrap_or_else(|e| {
        tracing::warn!("{} unavailable: {}", table, e);
        Vec::new()
    })
}
