//! Common test utilities and fixtures.

use soil_core::SoilMeasurement;
use soil_store::SqliteStore;
use tempfile::TempDir;

/// Build a measurement with fixed coordinates.
#[allow(dead_code)]
pub fn measurement(
    location: &str,
    depth_cm: f64,
    carbon_percentage: f64,
    bulk_density: f64,
) -> SoilMeasurement {
    SoilMeasurement {
        location: location.to_string(),
        latitude: 51.5,
        longitude: -0.12,
        depth_cm,
        carbon_percentage,
        bulk_density,
    }
}

/// Create a SQLite database with the soil schema and the given rows.
#[allow(dead_code)]
pub async fn seeded_sqlite(rows: &[SoilMeasurement]) -> (TempDir, SqliteStore) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let store = SqliteStore::new(temp_dir.path().join("soil.db"), true)
        .expect("Failed to create SQLite store");
    store
        .create_schema()
        .await
        .expect("Failed to create soil schema");
    for row in rows {
        store
            .insert_measurement(row)
            .await
            .expect("Failed to insert measurement");
    }
    (temp_dir, store)
}
