//! Advance and expense models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ContractorId, WorkerId};

/// A cash outflow paid to a worker or a contractor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advance {
    pub id: Uuid,
    pub target: AdvanceTarget,
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

impl Advance {
    /// Worker this advance is deducted from, `None` for contractor payments
    pub fn worker_id(&self) -> Option<WorkerId> {
        match self.target {
            AdvanceTarget::Worker(id) => Some(id),
            AdvanceTarget::Contractor(_) => None,
        }
    }

    pub fn is_for_worker(&self, worker_id: WorkerId) -> bool {
        self.worker_id() == Some(worker_id)
    }
}

/// Who received an advance. Exactly one party per advance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceTarget {
    Worker(WorkerId),
    Contractor(ContractorId),
}

/// Expense category of an advance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ExpenseCategory {
    /// Cash advance on wages
    #[default]
    #[serde(rename = "AVANCE")]
    Advance,
    #[serde(rename = "ENGRAIS")]
    Fertilizer,
    #[serde(rename = "MATERIEL")]
    Equipment,
    #[serde(rename = "TRANSPORT")]
    Transport,
    #[serde(rename = "TRAVAUX")]
    Labor,
    #[serde(rename = "DIVERS")]
    Other,
}

/// How an advance was paid out
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    #[serde(rename = "ESPECES")]
    Cash,
    #[serde(rename = "VIREMENT")]
    Transfer,
}
