//! Common types used across the workspace

use uuid::Uuid;

/// Identifier of a payroll worker ("employee" in the store)
pub type WorkerId = Uuid;

/// Identifier of an external contractor ("entrepreneur" in the store)
pub type ContractorId = Uuid;

/// Identifier of an authenticated user account
pub type UserId = Uuid;

/// Currency label used on screens and in exports (West African CFA franc)
pub const CURRENCY_LABEL: &str = "F";
