//! Worker and contractor models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ContractorId, UserId, WorkerId};

/// A plantation worker tracked for payroll
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub status: WorkerStatus,
    pub category: CropType,
    pub phone: Option<String>,
    pub notes: Option<String>,
    /// Account linked to this worker, if they can sign in
    pub user_id: Option<UserId>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Worker {
    /// Harvest and task entry forms only offer active workers.
    ///
    /// The ledger ignores this: departed workers keep their balance.
    pub fn accepts_new_entries(&self) -> bool {
        self.status == WorkerStatus::Active
    }
}

/// Worker lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum WorkerStatus {
    #[default]
    #[serde(rename = "ACTIF")]
    Active,
    #[serde(rename = "DEMISSIONNE")]
    Departed,
}

/// Crop or role category of a worker, also the crop of a harvest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CropType {
    /// Rubber tapping, paid per kg of latex
    #[default]
    #[serde(rename = "HEVEA")]
    Hevea,
    #[serde(rename = "CACAO")]
    Cacao,
    /// General labourer paid through tasks
    #[serde(rename = "MANOEUVRE")]
    Laborer,
    #[serde(rename = "CONTRACTUEL")]
    Contract,
    /// Plantation manager on the payroll
    #[serde(rename = "GERANT")]
    Manager,
}

impl CropType {
    pub const ALL: [CropType; 5] = [
        CropType::Hevea,
        CropType::Cacao,
        CropType::Laborer,
        CropType::Contract,
        CropType::Manager,
    ];

    /// Store code, also printed in the balance export
    pub fn code(&self) -> &'static str {
        match self {
            CropType::Hevea => "HEVEA",
            CropType::Cacao => "CACAO",
            CropType::Laborer => "MANOEUVRE",
            CropType::Contract => "CONTRACTUEL",
            CropType::Manager => "GERANT",
        }
    }

    /// Parse a store code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropType::Hevea => write!(f, "Hévéa"),
            CropType::Cacao => write!(f, "Cacao"),
            CropType::Laborer => write!(f, "Manœuvre"),
            CropType::Contract => write!(f, "Contractuel"),
            CropType::Manager => write!(f, "Gérant"),
        }
    }
}

/// An external service provider who can receive advances
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contractor {
    pub id: ContractorId,
    pub name: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<UserId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn worker(status: WorkerStatus) -> Worker {
        Worker {
            id: Uuid::new_v4(),
            name: "Kouassi Koffi".to_string(),
            status,
            category: CropType::Hevea,
            phone: None,
            notes: None,
            user_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_only_active_workers_accept_entries() {
        assert!(worker(WorkerStatus::Active).accepts_new_entries());
        assert!(!worker(WorkerStatus::Departed).accepts_new_entries());
    }

    #[test]
    fn test_crop_codes_round_trip() {
        for crop in CropType::ALL {
            assert_eq!(CropType::from_code(crop.code()), Some(crop));
        }
        assert_eq!(CropType::from_code("CAFE"), None);
    }

    #[test]
    fn test_crop_serializes_as_store_code() {
        let json = serde_json::to_string(&CropType::Laborer).unwrap();
        assert_eq!(json, "\"MANOEUVRE\"");
        let status: WorkerStatus = serde_json::from_str("\"DEMISSIONNE\"").unwrap();
        assert_eq!(status, WorkerStatus::Departed);
    }
}
