//! Test fixtures for soil measurements and failing stores.

use async_trait::async_trait;
use soil_core::SoilMeasurement;
use soil_store::{SoilStore, StoreError, StoreResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A small, fixed set of measurements.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub fn sample_measurements() -> Vec<SoilMeasurement> {
    vec![
        SoilMeasurement {
            location: "North Field".to_string(),
            latitude: 52.2053,
            longitude: 0.1218,
            depth_cm: 30.0,
            carbon_percentage: 2.5,
            bulk_density: 1.2,
        },
        SoilMeasurement {
            location: "South Field".to_string(),
            latitude: 51.7520,
            longitude: -1.2577,
            depth_cm: 15.0,
            carbon_percentage: 1.8,
            bulk_density: 1.25,
        },
        SoilMeasurement {
            location: "North Field".to_string(),
            latitude: 52.2061,
            longitude: 0.1230,
            depth_cm: 20.0,
            carbon_percentage: 3.0,
            bulk_density: 1.4,
        },
    ]
}

/// Store whose connection attempts always time out, counting calls.
#[allow(dead_code)]
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl FailingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SoilStore for FailingStore {
    async fn fetch_measurements(&self) -> StoreResult<Vec<SoilMeasurement>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Timeout(1))
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Timeout(1))
    }
}
