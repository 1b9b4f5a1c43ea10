//! Reporting handlers for the accounting export

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppResult;
use crate::services::ReportingService;
use crate::AppState;

/// Download the balance report
pub async fn export_balances(State(state): State<AppState>) -> AppResult<Response> {
    let service = ReportingService::new(state.store.clone());
    let bytes = service.export_balances().await?;

    let disposition = format!("attachment; filename=\"{}\"", state.config.export.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, shared::EXPORT_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
