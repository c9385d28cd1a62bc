//! Application state shared across handlers.

use crate::service::DataService;
use soil_core::config::AppConfig;
use soil_export::Exporter;
use soil_store::SoilStore;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is immutable after startup; each request opens its own
/// store connection.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Soil record source.
    pub data: DataService,
    /// Export file writer.
    pub exporter: Exporter,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: AppConfig, store: Arc<dyn SoilStore>) -> Self {
        let exporter = Exporter::new(config.export.dir.clone());
        Self {
            config: Arc::new(config),
            data: DataService::new(store),
            exporter,
        }
    }
}
