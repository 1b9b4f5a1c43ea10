//! Shared types and ledger logic for AgriPay
//!
//! This crate contains the domain models, the balance calculator and the
//! balance export shared between the report server, the browser client (via
//! WASM), and other components of the system.

pub mod export;
pub mod ledger;
pub mod models;
pub mod types;
pub mod validation;

pub use export::*;
pub use ledger::*;
pub use models::*;
pub use types::*;
pub use validation::*;
