//! Soil store trait.

use crate::error::StoreResult;
use async_trait::async_trait;
use soil_core::SoilMeasurement;

/// Read-only access to raw soil measurements.
#[async_trait]
pub trait SoilStore: Send + Sync {
    /// Read every measurement in the store's natural order.
    async fn fetch_measurements(&self) -> StoreResult<Vec<SoilMeasurement>>;

    /// Check that a connection can be opened and a trivial query runs.
    async fn health_check(&self) -> StoreResult<()>;
}
