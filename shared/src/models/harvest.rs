//! Harvest models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CropType;
use crate::types::WorkerId;

/// A piece-rate harvest record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Harvest {
    pub id: Uuid,
    pub worker_id: WorkerId,
    pub date: NaiveDate,
    /// Harvested weight in kg
    pub weight: Decimal,
    /// Rate per kg in effect when the harvest was entered.
    /// Later settings changes never touch it.
    pub pay_rate: Decimal,
    pub crop: CropType,
}

impl Harvest {
    /// Amount earned by this harvest, unrounded
    pub fn value(&self) -> Decimal {
        self.weight * self.pay_rate
    }
}
