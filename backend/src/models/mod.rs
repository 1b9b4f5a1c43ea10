//! Data models for the AgriPay report server
//!
//! Re-exports models from the shared crate and adds the raw row shapes
//! returned by the hosted store.

mod store_rows;

pub use shared::models::*;
pub use store_rows::*;
