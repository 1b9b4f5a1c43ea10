//! User profiles, roles and capabilities
//!
//! The ledger never looks at roles. These checks are for the UI layer, which
//! decides which views and actions to offer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::UserId;

/// A user account profile stored next to the auth record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    /// Worker or contractor this account belongs to
    pub linked_entity_id: Option<Uuid>,
}

/// Account roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[serde(rename = "ADMIN")]
    Admin,
    /// Plantation manager
    #[serde(rename = "GERANT")]
    Manager,
    #[default]
    #[serde(rename = "EMPLOYE")]
    Employee,
    /// Contractor account
    #[serde(rename = "FOURNISSEUR")]
    Supplier,
}

/// Actions the UI can offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewDashboard,
    ViewJournal,
    /// Create and edit workers, harvests, tasks and advances
    ManageRecords,
    ManageSettings,
    DeleteRecords,
    ManageAccounts,
    ExportReport,
}

impl UserRole {
    /// Parse the role column, which the store keeps as free text
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(UserRole::Admin),
            "GERANT" => Some(UserRole::Manager),
            "EMPLOYE" => Some(UserRole::Employee),
            "FOURNISSEUR" => Some(UserRole::Supplier),
            _ => None,
        }
    }

    /// Capabilities granted to this role
    pub fn capabilities(&self) -> &'static [Capability] {
        use Capability::*;
        match self {
            UserRole::Admin => &[
                ViewDashboard,
                ViewJournal,
                ManageRecords,
                ManageSettings,
                DeleteRecords,
                ManageAccounts,
                ExportReport,
            ],
            UserRole::Manager => &[
                ViewDashboard,
                ViewJournal,
                ManageRecords,
                ManageSettings,
                ExportReport,
            ],
            UserRole::Employee | UserRole::Supplier => &[ViewDashboard, ViewJournal],
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// Role in effect for a signed-in session.
///
/// A session whose profile row is missing acts as an administrator, so the
/// owner can still repair accounts.
pub fn effective_role(profile: Option<&UserProfile>) -> UserRole {
    profile.map(|p| p.role).unwrap_or(UserRole::Admin)
}

/// Top-level application views
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppTab {
    Dashboard,
    Employees,
    Journal,
    Settings,
}

impl AppTab {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dashboard" => Some(AppTab::Dashboard),
            "employees" => Some(AppTab::Employees),
            "journal" => Some(AppTab::Journal),
            "settings" => Some(AppTab::Settings),
            _ => None,
        }
    }

    pub fn required_capability(&self) -> Capability {
        match self {
            AppTab::Dashboard => Capability::ViewDashboard,
            AppTab::Journal => Capability::ViewJournal,
            AppTab::Employees => Capability::ManageRecords,
            AppTab::Settings => Capability::ManageSettings,
        }
    }

    pub fn is_visible_to(&self, role: UserRole) -> bool {
        role.can(self.required_capability())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_everything() {
        for cap in UserRole::Manager.capabilities() {
            assert!(UserRole::Admin.can(*cap));
        }
        assert!(UserRole::Admin.can(Capability::DeleteRecords));
        assert!(UserRole::Admin.can(Capability::ManageAccounts));
    }

    #[test]
    fn test_manager_cannot_delete_or_manage_accounts() {
        assert!(UserRole::Manager.can(Capability::ManageRecords));
        assert!(!UserRole::Manager.can(Capability::DeleteRecords));
        assert!(!UserRole::Manager.can(Capability::ManageAccounts));
    }

    #[test]
    fn test_tab_visibility() {
        for role in [UserRole::Employee, UserRole::Supplier] {
            assert!(AppTab::Dashboard.is_visible_to(role));
            assert!(AppTab::Journal.is_visible_to(role));
            assert!(!AppTab::Employees.is_visible_to(role));
            assert!(!AppTab::Settings.is_visible_to(role));
        }
        assert!(AppTab::Settings.is_visible_to(UserRole::Manager));
    }

    #[test]
    fn test_missing_profile_acts_as_admin() {
        assert_eq!(effective_role(None), UserRole::Admin);
        let profile = UserProfile {
            id: Uuid::new_v4(),
            username: "awa".to_string(),
            role: UserRole::Employee,
            linked_entity_id: None,
        };
        assert_eq!(effective_role(Some(&profile)), UserRole::Employee);
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(UserRole::from_code("GERANT"), Some(UserRole::Manager));
        assert_eq!(UserRole::from_code("gerant"), None);
    }
}
