//! Domain models for AgriPay

mod advance;
mod harvest;
mod rain;
mod settings;
mod snapshot;
mod task;
mod user;
mod worker;

pub use advance::*;
pub use harvest::*;
pub use rain::*;
pub use settings::*;
pub use snapshot::*;
pub use task::*;
pub use user::*;
pub use worker::*;
