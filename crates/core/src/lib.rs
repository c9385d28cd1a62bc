//! Core domain types for the soil carbon dashboard.
//!
//! This crate defines the data model shared by every other crate:
//! - Raw soil measurements as stored in the database
//! - Soil records with the derived SOC stock
//! - The SOC stock derivation rule
//! - Application configuration

pub mod config;
pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use record::{SoilMeasurement, SoilRecord, round_to_hundredths, soc_stock};
