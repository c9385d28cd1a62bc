//! Soil measurement store for the soil carbon dashboard.
//!
//! Every read opens its own connection and releases it before returning,
//! on success and on failure alike. There is no pool and no cache.

pub mod error;
pub mod models;
pub mod mysql;
pub mod sqlite;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use mysql::MysqlStore;
pub use sqlite::SqliteStore;
pub use store::SoilStore;

use soil_core::config::DatabaseConfig;
use std::sync::Arc;
use std::time::Duration;

/// Default timeout for opening a store connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a soil store from configuration.
///
/// No connection is opened here; connections are opened per read.
pub fn from_config(config: &DatabaseConfig) -> StoreResult<Arc<dyn SoilStore>> {
    match config {
        DatabaseConfig::Mysql {
            host,
            port,
            username,
            password,
            database,
            connect_timeout_secs,
        } => {
            let connect_timeout = connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT);
            let store = MysqlStore::from_params(
                host,
                *port,
                username.as_deref(),
                password.as_deref(),
                database,
                connect_timeout,
            )?;
            Ok(Arc::new(store) as Arc<dyn SoilStore>)
        }
        DatabaseConfig::Sqlite { path } => {
            let store = SqliteStore::new(path, false)?;
            Ok(Arc::new(store) as Arc<dyn SoilStore>)
        }
    }
}
