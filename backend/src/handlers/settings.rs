//! Settings handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::ledger::{LedgerService, PayRates};
use crate::AppState;

/// Get current market settings and per-crop pay rates
pub async fn get_pay_rates(State(state): State<AppState>) -> AppResult<Json<PayRates>> {
    let service = LedgerService::new(state.store.clone());
    let rates = service.get_pay_rates().await?;
    Ok(Json(rates))
}
