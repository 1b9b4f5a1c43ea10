//! Route definitions for the AgriPay report server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/ledger", ledger_routes())
        .nest("/reports", report_routes())
        .nest("/settings", settings_routes())
}

/// Balance routes
fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/roster", get(handlers::get_roster))
        .route("/workers/:id", get(handlers::get_worker_balance))
}

/// Export routes
fn report_routes() -> Router<AppState> {
    Router::new().route("/balances.csv", get(handlers::export_balances))
}

/// Settings routes (read-only)
fn settings_routes() -> Router<AppState> {
    Router::new().route("/pay-rates", get(handlers::get_pay_rates))
}
