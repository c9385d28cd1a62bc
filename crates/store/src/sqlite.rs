//! SQLite-based soil store implementation.
//!
//! Intended for local runs and tests. The production store is MySQL.

use crate::error::{StoreError, StoreResult};
use crate::models::SoilMeasurementRow;
use crate::store::SoilStore;
use async_trait::async_trait;
use soil_core::SoilMeasurement;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Soil data query for SQLite.
const SQLITE_SOIL_QUERY: &str = r#"
    SELECT
        location,
        CAST(latitude AS REAL) AS latitude,
        CAST(longitude AS REAL) AS longitude,
        CAST(depth_cm AS REAL) AS depth_cm,
        CAST(carbon_percentage AS REAL) AS carbon_percentage,
        CAST(bulk_density AS REAL) AS bulk_density
    FROM soil_data
"#;

const SQLITE_SOIL_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS soil_data (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        location TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        depth_cm REAL NOT NULL,
        carbon_percentage REAL NOT NULL,
        bulk_density REAL NOT NULL
    )
"#;

/// SQLite-based soil store.
pub struct SqliteStore {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SqliteStore {
    /// Create a store for the database file at `path`.
    ///
    /// With `create_if_missing = false` the store opens the file read-only and
    /// a missing file surfaces as a connection error on the first read.
    pub fn new(path: impl AsRef<Path>, create_if_missing: bool) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if create_if_missing {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Config(format!(
                        "failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(create_if_missing)
            .read_only(!create_if_missing)
            .busy_timeout(Duration::from_secs(5));

        tracing::info!(path = %path.display(), "Configured SQLite soil store");

        Ok(Self { path, options })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> StoreResult<SqliteConnection> {
        self.options.connect().await.map_err(StoreError::Connection)
    }

    /// Create the `soil_data` table if it does not exist.
    pub async fn create_schema(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(SQLITE_SOIL_SCHEMA).execute(&mut conn).await;
        close_quietly(conn).await;
        result.map_err(StoreError::Query)?;
        Ok(())
    }

    /// Insert one raw measurement.
    pub async fn insert_measurement(&self, measurement: &SoilMeasurement) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO soil_data (
                location, latitude, longitude, depth_cm, carbon_percentage, bulk_density
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(measurement.location.as_str())
        .bind(measurement.latitude)
        .bind(measurement.longitude)
        .bind(measurement.depth_cm)
        .bind(measurement.carbon_percentage)
        .bind(measurement.bulk_density)
        .execute(&mut conn)
        .await;
        close_quietly(conn).await;
        result.map_err(StoreError::Query)?;
        Ok(())
    }
}

async fn close_quietly(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close SQLite connection cleanly");
    }
}

#[async_trait]
impl SoilStore for SqliteStore {
    async fn fetch_measurements(&self) -> StoreResult<Vec<SoilMeasurement>> {
        let mut conn = self.connect().await?;

        let result = sqlx::query_as::<_, SoilMeasurementRow>(SQLITE_SOIL_QUERY)
            .fetch_all(&mut conn)
            .await;

        // Release the connection whatever the query outcome.
        close_quietly(conn).await;

        let rows = result.map_err(StoreError::Query)?;
        tracing::debug!(rows = rows.len(), "Fetched soil measurements from SQLite");
        Ok(rows.into_iter().map(SoilMeasurement::from).collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT 1").execute(&mut conn).await;
        close_quietly(conn).await;
        result.map_err(StoreError::Query)?;
        Ok(())
    }
}
