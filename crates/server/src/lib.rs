//! HTTP API server for the soil carbon dashboard.
//!
//! This crate provides:
//! - The data service (store read plus SOC stock derivation)
//! - JSON listing of soil records
//! - CSV and PDF export endpoints
//! - The static dashboard page

pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use service::DataService;
pub use state::AppState;
