//! Data service: the single "get all soil records" operation.

use soil_core::SoilRecord;
use soil_store::{SoilStore, StoreResult};
use std::sync::Arc;
use std::time::Instant;

/// Reads raw measurements and derives soil records.
#[derive(Clone)]
pub struct DataService {
    store: Arc<dyn SoilStore>,
}

impl DataService {
    pub fn new(store: Arc<dyn SoilStore>) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &Arc<dyn SoilStore> {
        &self.store
    }

    /// Fetch every record, in store order, with SOC stock recomputed.
    ///
    /// Failures are logged and returned; mapping them to an empty list is
    /// the caller's decision.
    pub async fn fetch_all(&self) -> StoreResult<Vec<SoilRecord>> {
        let started = Instant::now();
        match self.store.fetch_measurements().await {
            Ok(measurements) => {
                let records: Vec<SoilRecord> =
                    measurements.into_iter().map(SoilRecord::from).collect();
                tracing::debug!(
                    records = records.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Fetched soil records"
                );
                Ok(records)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.kind(),
                    "Failed to fetch soil records"
                );
                Err(e)
            }
        }
    }
}
