//! WebAssembly module for AgriPay
//!
//! Provides client-side computation for:
//! - Worker balances and the roster report
//! - The accounting export file
//! - Harvest pay-rate prefill and entry form checks
//! - Tab and export access, account e-mails
//!
//! Record collections are passed as a JSON snapshot
//! (`{workers, harvests, tasks, advances, settings, ...}`); missing
//! collections are treated as empty.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

#[derive(Serialize)]
struct RosterPayload<'a> {
    rows: Vec<shared::RosterRow<'a>>,
    summary: shared::RosterSummary,
}

fn parse_snapshot(snapshot_json: &str) -> Result<LedgerSnapshot, JsValue> {
    serde_json::from_str(snapshot_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid snapshot JSON: {}", e)))
}

fn to_f64(value: Decimal) -> f64 {
    value.to_string().parse().unwrap_or(0.0)
}

/// Amount due to a worker, rounded to the whole franc
#[wasm_bindgen]
pub fn balance_due(worker_id: &str, snapshot_json: &str) -> Result<f64, JsValue> {
    let worker_id = Uuid::parse_str(worker_id)
        .map_err(|e| JsValue::from_str(&format!("Invalid worker id: {}", e)))?;
    let snapshot = parse_snapshot(snapshot_json)?;

    let due = shared::balance_for(
        worker_id,
        &snapshot.harvests,
        &snapshot.tasks,
        &snapshot.advances,
    );
    Ok(to_f64(due))
}

/// Roster rows and totals as JSON
#[wasm_bindgen]
pub fn roster_report(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let rows = snapshot.roster_report();
    let summary = shared::RosterSummary::from_rows(&rows);

    serde_json::to_string(&RosterPayload { rows, summary })
        .map_err(|e| JsValue::from_str(&format!("Failed to encode roster: {}", e)))
}

/// Bytes of `EXPORT_AGRIPAY.csv`, ready for a Blob download
#[wasm_bindgen]
pub fn export_balances(snapshot_json: &str) -> Result<Vec<u8>, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let rows = snapshot.roster_report();

    shared::balance_report_bytes(&rows)
        .map_err(|e| JsValue::from_str(&format!("Export failed: {}", e)))
}

/// Workers offered by the harvest and task entry forms, as JSON
#[wasm_bindgen]
pub fn entry_workers(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let workers: Vec<&Worker> = snapshot.active_workers().collect();

    serde_json::to_string(&workers)
        .map_err(|e| JsValue::from_str(&format!("Failed to encode workers: {}", e)))
}

/// Rate per kg to prefill on a new harvest, `undefined` for task-paid categories
#[wasm_bindgen]
pub fn harvest_pay_rate(settings_json: &str, crop_code: &str) -> Result<Option<f64>, JsValue> {
    let settings: MarketSettings = serde_json::from_str(settings_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings JSON: {}", e)))?;
    let crop = CropType::from_code(crop_code)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown crop: {}", crop_code)))?;

    Ok(settings.pay_rate_for(crop).map(to_f64))
}

/// Check market settings before they are saved
#[wasm_bindgen]
pub fn validate_settings(settings_json: &str) -> Result<(), JsValue> {
    let settings: MarketSettings = serde_json::from_str(settings_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings JSON: {}", e)))?;

    shared::validate_market_settings(&settings).map_err(JsValue::from_str)
}

/// Check a harvest weight typed in the entry form
#[wasm_bindgen]
pub fn validate_harvest_weight(weight: f64) -> Result<(), JsValue> {
    let weight = Decimal::try_from(weight).unwrap_or(Decimal::ZERO);
    shared::validate_weight(weight).map_err(JsValue::from_str)
}

/// Check a task fee or advance amount typed in the entry form
#[wasm_bindgen]
pub fn validate_entry_amount(amount: f64) -> Result<(), JsValue> {
    let amount = Decimal::try_from(amount).unwrap_or(Decimal::ZERO);
    shared::validate_amount(amount).map_err(JsValue::from_str)
}

/// Check the optional phone number of a worker or contractor
#[wasm_bindgen]
pub fn validate_phone(phone: &str) -> Result<(), JsValue> {
    if phone.trim().is_empty() {
        return Ok(());
    }
    shared::validate_ivorian_phone(phone).map_err(JsValue::from_str)
}

fn parse_profile(profile_json: Option<String>) -> Result<Option<UserProfile>, JsValue> {
    profile_json
        .map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))
        })
        .transpose()
}

/// Whether the signed-in user may open a tab.
///
/// `profile_json` is absent when the session has no profile row.
#[wasm_bindgen]
pub fn can_access_tab(profile_json: Option<String>, tab_id: &str) -> Result<bool, JsValue> {
    let profile = parse_profile(profile_json)?;
    let role = effective_role(profile.as_ref());
    Ok(AppTab::from_id(tab_id).is_some_and(|tab| tab.is_visible_to(role)))
}

/// Whether the signed-in user may download the accounting export
#[wasm_bindgen]
pub fn can_export_report(profile_json: Option<String>) -> Result<bool, JsValue> {
    let profile = parse_profile(profile_json)?;
    Ok(effective_role(profile.as_ref()).can(Capability::ExportReport))
}

/// Sign-in e-mail derived from a username
#[wasm_bindgen]
pub fn technical_email_for(username: &str) -> Result<String, JsValue> {
    shared::technical_email_for(username).map_err(JsValue::from_str)
}
