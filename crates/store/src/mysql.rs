//! MySQL-based soil store implementation.

use crate::error::{StoreError, StoreResult};
use crate::models::SoilMeasurementRow;
use crate::store::SoilStore;
use async_trait::async_trait;
use soil_core::SoilMeasurement;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use std::time::Duration;

/// Soil data query for MySQL.
const MYSQL_SOIL_QUERY: &str = r#"
    SELECT
        location,
        CAST(latitude AS DOUBLE) AS latitude,
        CAST(longitude AS DOUBLE) AS longitude,
        CAST(depth_cm AS DOUBLE) AS depth_cm,
        CAST(carbon_percentage AS DOUBLE) AS carbon_percentage,
        CAST(bulk_density AS DOUBLE) AS bulk_density
    FROM soil_data
"#;

/// MySQL-based soil store.
///
/// Holds connection options only; each read opens and closes its own
/// connection.
pub struct MysqlStore {
    options: MySqlConnectOptions,
    connect_timeout: Duration,
}

impl MysqlStore {
    /// Create a store from individual connection parameters.
    pub fn from_params(
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        database: &str,
        connect_timeout: Duration,
    ) -> StoreResult<Self> {
        if host.trim().is_empty() {
            return Err(StoreError::Config("mysql host is empty".to_string()));
        }

        let mut options = MySqlConnectOptions::new()
            .host(host)
            .port(port)
            .database(database);

        if let Some(user) = username {
            options = options.username(user);
        }

        if let Some(pass) = password {
            options = options.password(pass);
        }

        // Log connection info without password
        tracing::info!(
            host = host,
            port = port,
            database = database,
            username = username.unwrap_or("<none>"),
            connect_timeout_secs = connect_timeout.as_secs(),
            "Configured MySQL soil store"
        );

        Ok(Self {
            options,
            connect_timeout,
        })
    }

    /// Open a fresh connection, bounded by the connect timeout.
    async fn connect(&self) -> StoreResult<MySqlConnection> {
        match tokio::time::timeout(self.connect_timeout, self.options.connect()).await {
            Ok(result) => result.map_err(StoreError::Connection),
            Err(_) => Err(StoreError::Timeout(self.connect_timeout.as_secs())),
        }
    }
}

#[async_trait]
impl SoilStore for MysqlStore {
    async fn fetch_measurements(&self) -> StoreResult<Vec<SoilMeasurement>> {
        let mut conn = self.connect().await?;

        let result = sqlx::query_as::<_, SoilMeasurementRow>(MYSQL_SOIL_QUERY)
            .fetch_all(&mut conn)
            .await;

        // Release the connection whatever the query outcome.
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close MySQL connection cleanly");
        }

        let rows = result.map_err(StoreError::Query)?;
        tracing::debug!(rows = rows.len(), "Fetched soil measurements from MySQL");
        Ok(rows.into_iter().map(SoilMeasurement::from).collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT 1").execute(&mut conn).await;
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close MySQL connection cleanly");
        }
        result.map_err(StoreError::Query)?;
        Ok(())
    }
}
