//! Row shapes of the hosted store tables and their mapping to domain models
//!
//! Columns are snake_case and several of them are nullable in the store, so
//! the mapping fills the same defaults the entry forms use.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::models::{
    Advance, AdvanceTarget, Contractor, CropType, ExpenseCategory, Harvest, MarketSettings,
    PaymentMethod, UserProfile, UserRole, WorkTask, Worker, WorkerStatus,
};

/// `employees` table row
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRow {
    pub id: Uuid,
    pub name: String,
    pub status: Option<WorkerStatus>,
    pub crop: Option<CropType>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<EmployeeRow> for Worker {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            status: row.status.unwrap_or_default(),
            category: row.crop.unwrap_or_default(),
            phone: row.phone,
            notes: row.notes,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

/// `entrepreneurs` table row
#[derive(Debug, Clone, Deserialize)]
pub struct EntrepreneurRow {
    pub id: Uuid,
    pub name: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<Uuid>,
}

impl From<EntrepreneurRow> for Contractor {
    fn from(row: EntrepreneurRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            specialty: row.specialty,
            phone: row.phone,
            user_id: row.user_id,
        }
    }
}

/// `harvests` table row
#[derive(Debug, Clone, Deserialize)]
pub struct HarvestRow {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub weight: Decimal,
    pub pay_rate: Decimal,
    pub crop: Option<CropType>,
}

impl From<HarvestRow> for Harvest {
    fn from(row: HarvestRow) -> Self {
        Self {
            id: row.id,
            worker_id: row.employee_id,
            date: row.date,
            weight: row.weight,
            pay_rate: row.pay_rate,
            crop: row.crop.unwrap_or_default(),
        }
    }
}

/// `work_tasks` table row
#[derive(Debug, Clone, Deserialize)]
pub struct WorkTaskRow {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: Decimal,
}

impl From<WorkTaskRow> for WorkTask {
    fn from(row: WorkTaskRow) -> Self {
        Self {
            id: row.id,
            worker_id: row.employee_id,
            date: row.date,
            description: row.description.unwrap_or_default(),
            amount: row.amount,
        }
    }
}

/// `advances` table row
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceRow {
    pub id: Uuid,
    pub employee_id: Option<Uuid>,
    pub entrepreneur_id: Option<Uuid>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Option<ExpenseCategory>,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

impl AdvanceRow {
    /// Map to a domain advance.
    ///
    /// A row naming a contractor is a contractor payment even if a worker id
    /// is also present. A row naming nobody has no target and yields `None`.
    pub fn into_advance(self) -> Option<Advance> {
        let target = match (self.entrepreneur_id, self.employee_id) {
            (Some(contractor), _) => AdvanceTarget::Contractor(contractor),
            (None, Some(worker)) => AdvanceTarget::Worker(worker),
            (None, None) => return None,
        };

        Some(Advance {
            id: self.id,
            target,
            date: self.date,
            amount: self.amount,
            category: self.category.unwrap_or_default(),
            payment_method: self.payment_method,
            notes: self.notes,
        })
    }
}

/// `settings` table row. Every column may be null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsRow {
    pub pay_rate_hevea: Option<Decimal>,
    pub pay_rate_cacao: Option<Decimal>,
    pub market_price_hevea: Option<Decimal>,
    pub market_price_cacao: Option<Decimal>,
    pub cacao_pay_ratio: Option<Decimal>,
}

impl From<SettingsRow> for MarketSettings {
    fn from(row: SettingsRow) -> Self {
        let defaults = MarketSettings::default();
        Self {
            pay_rate_hevea: row.pay_rate_hevea.unwrap_or(defaults.pay_rate_hevea),
            pay_rate_cacao: row.pay_rate_cacao.unwrap_or(defaults.pay_rate_cacao),
            market_price_hevea: row.market_price_hevea.unwrap_or(defaults.market_price_hevea),
            market_price_cacao: row.market_price_cacao.unwrap_or(defaults.market_price_cacao),
            cacao_pay_ratio: row.cacao_pay_ratio.unwrap_or(defaults.cacao_pay_ratio),
        }
    }
}

/// `profiles` table row
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub linked_entity_id: Option<Uuid>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        let username = row
            .username
            .or_else(|| {
                row.email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Inconnu".to_string());

        Self {
            id: row.id,
            username,
            role: row
                .role
                .as_deref()
                .and_then(UserRole::from_code)
                .unwrap_or_default(),
            linked_entity_id: row.linked_entity_id,
        }
    }
}
