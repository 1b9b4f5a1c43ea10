//! Business logic services for the AgriPay report server

pub mod ledger;
pub mod reporting;

pub use ledger::LedgerService;
pub use reporting::ReportingService;
