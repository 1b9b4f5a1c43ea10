//! Flat-fee work task models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::WorkerId;

/// A flat-fee task performed by a worker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkTask {
    pub id: Uuid,
    pub worker_id: WorkerId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}
