//! Server test utilities.

use soil_core::SoilMeasurement;
use soil_core::config::{AppConfig, DatabaseConfig, ExportConfig, ServerConfig};
use soil_server::{AppState, create_router};
use soil_store::{SoilStore, SqliteStore};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A test server wrapper with all dependencies.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    pub export_dir: PathBuf,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a test server backed by a SQLite store holding `rows`.
    pub async fn with_rows(rows: &[SoilMeasurement]) -> Self {
        Self::with_rows_and_config(rows, |_| {}).await
    }

    /// Create a test server with custom config modifications.
    pub async fn with_rows_and_config<F>(rows: &[SoilMeasurement], modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

        // Seed the database through a writable handle.
        let db_path = temp_dir.path().join("soil.db");
        let writer = SqliteStore::new(&db_path, true).expect("Failed to create SQLite store");
        writer
            .create_schema()
            .await
            .expect("Failed to create soil schema");
        for row in rows {
            writer
                .insert_measurement(row)
                .await
                .expect("Failed to insert measurement");
        }

        let mut config = Self::config(&temp_dir, DatabaseConfig::Sqlite { path: db_path });
        modifier(&mut config);

        // The server reads through the same path the binary uses.
        let store = soil_store::from_config(&config.database).expect("Failed to build store");
        Self::build(temp_dir, config, store)
    }

    /// Create a test server around an arbitrary store.
    pub fn with_store<F>(store: Arc<dyn SoilStore>, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let mut config = Self::config(
            &temp_dir,
            DatabaseConfig::Sqlite {
                path: temp_dir.path().join("unused.db"),
            },
        );
        modifier(&mut config);
        Self::build(temp_dir, config, store)
    }

    fn config(temp_dir: &TempDir, database: DatabaseConfig) -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database,
            export: ExportConfig {
                dir: temp_dir.path().join("exports"),
            },
        }
    }

    fn build(temp_dir: TempDir, config: AppConfig, store: Arc<dyn SoilStore>) -> Self {
        let export_dir = config.export.dir.clone();
        let state = AppState::new(config, store);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            export_dir,
            _temp_dir: temp_dir,
        }
    }

    /// Number of files currently in the export directory.
    pub fn export_count(&self) -> usize {
        std::fs::read_dir(&self.export_dir)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}
