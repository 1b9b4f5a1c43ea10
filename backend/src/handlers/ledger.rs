//! Ledger handlers for roster and per-worker balances

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::ledger::{LedgerService, RosterReport, WorkerBalance};
use crate::AppState;

/// Get the balance of every worker
pub async fn get_roster(State(state): State<AppState>) -> AppResult<Json<RosterReport>> {
    let service = LedgerService::new(state.store.clone());
    let report = service.get_roster_report().await?;
    Ok(Json(report))
}

/// Get the balance breakdown of one worker
pub async fn get_worker_balance(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
) -> AppResult<Json<WorkerBalance>> {
    let worker_id = Uuid::parse_str(&worker_id).map_err(|_| AppError::Validation {
        field: "worker_id".to_string(),
        message: "Invalid worker id".to_string(),
        message_fr: "Identifiant d'employé invalide".to_string(),
    })?;

    let service = LedgerService::new(state.store.clone());
    let balance = service.get_worker_balance(worker_id).await?;
    Ok(Json(balance))
}
