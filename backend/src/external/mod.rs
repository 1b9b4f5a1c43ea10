//! External API integrations

pub mod store;

pub use store::StoreClient;
