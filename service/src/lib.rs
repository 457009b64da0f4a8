//! Account Service Library
//!
//! A REST API microservice that manages customer account records backed by a
//! relational table.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod state;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::Config;
pub use errors::{ServiceError, ServiceResult};
pub use models::{Account, AccountData};
pub use state::AppState;
