//! Ledger service
//! Fetches a fresh snapshot from the store and runs the balance calculator on it

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::StoreClient;
use crate::models::{CropType, MarketSettings, Worker};
use shared::{balance_breakdown, Balance, RosterRow, RosterSummary};

/// Ledger service
#[derive(Clone)]
pub struct LedgerService {
    store: StoreClient,
}

/// A worker together with their balance
#[derive(Debug, Clone, Serialize)]
pub struct WorkerBalance {
    pub worker: Worker,
    #[serde(flatten)]
    pub balance: Balance,
}

impl From<&RosterRow<'_>> for WorkerBalance {
    fn from(row: &RosterRow<'_>) -> Self {
        Self {
            worker: row.worker.clone(),
            balance: row.balance,
        }
    }
}

/// Roster report response
#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub generated_at: DateTime<Utc>,
    pub summary: RosterSummary,
    pub rows: Vec<WorkerBalance>,
}

/// Effective pay rate of one crop category
#[derive(Debug, Serialize)]
pub struct CropPayRate {
    pub crop: CropType,
    pub label: String,
    /// `None` for categories paid through tasks
    pub pay_rate: Option<Decimal>,
}

/// Pay rates response
#[derive(Debug, Serialize)]
pub struct PayRates {
    pub settings: MarketSettings,
    pub rates: Vec<CropPayRate>,
}

impl LedgerService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// Balance of every worker on the roster, in roster order
    pub async fn get_roster_report(&self) -> AppResult<RosterReport> {
        let snapshot = self.store.fetch_snapshot().await?;
        let rows = snapshot.roster_report();
        let summary = RosterSummary::from_rows(&rows);

        tracing::info!(
            workers = summary.worker_count,
            total_due = %summary.total_due,
            "Computed roster report"
        );

        Ok(RosterReport {
            generated_at: Utc::now(),
            summary,
            rows: rows.iter().map(WorkerBalance::from).collect(),
        })
    }

    /// Balance of a single worker
    pub async fn get_worker_balance(&self, worker_id: Uuid) -> AppResult<WorkerBalance> {
        let snapshot = self.store.fetch_snapshot().await?;

        let worker = snapshot
            .worker(worker_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Worker".to_string()))?;

        let balance = balance_breakdown(
            worker_id,
            &snapshot.harvests,
            &snapshot.tasks,
            &snapshot.advances,
        );

        tracing::debug!(worker_id = %worker_id, due = %balance.due, "Computed worker balance");

        Ok(WorkerBalance { worker, balance })
    }

    /// Current settings and the rate prefilled on new harvests of each crop
    pub async fn get_pay_rates(&self) -> AppResult<PayRates> {
        let settings = self.store.fetch_settings().await;

        let rates = CropType::ALL
            .iter()
            .map(|&crop| CropPayRate {
                crop,
                label: crop.to_string(),
                pay_rate: settings.pay_rate_for(crop),
            })
            .collect();

        Ok(PayRates { settings, rates })
    }
}
