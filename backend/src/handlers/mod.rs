//! HTTP handlers for the AgriPay report server

pub mod health;
pub mod ledger;
pub mod reporting;
pub mod settings;

pub use health::health_check;
pub use ledger::{get_roster, get_worker_balance};
pub use reporting::export_balances;
pub use settings::get_pay_rates;
