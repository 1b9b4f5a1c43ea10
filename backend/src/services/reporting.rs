//! Reporting service for the accounting export

use crate::error::AppResult;
use crate::external::StoreClient;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    store: StoreClient,
}

impl ReportingService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// Balance export as downloaded by the accountant (BOM-prefixed CSV)
    pub async fn export_balances(&self) -> AppResult<Vec<u8>> {
        let snapshot = self.store.fetch_snapshot().await?;
        let rows = snapshot.roster_report();
        let bytes = shared::balance_report_bytes(&rows)?;

        tracing::info!(rows = rows.len(), bytes = bytes.len(), "Exported balance report");

        Ok(bytes)
    }
}
