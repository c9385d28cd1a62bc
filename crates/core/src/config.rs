//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Answer the listing and export routes with empty data when the store
    /// fails, instead of an error status (default: true).
    #[serde(default = "default_store_errors_as_empty")]
    pub store_errors_as_empty: bool,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_store_errors_as_empty() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            store_errors_as_empty: default_store_errors_as_empty(),
        }
    }
}

/// Soil measurement database configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfig {
    /// MySQL / MariaDB server.
    Mysql {
        #[serde(default = "default_mysql_host")]
        host: String,
        #[serde(default = "default_mysql_port")]
        port: u16,
        /// Database user.
        username: Option<String>,
        /// Database password. Prefer SOIL_DATABASE__PASSWORD over the config file.
        password: Option<String>,
        #[serde(default = "default_mysql_database")]
        database: String,
        /// Connection timeout in seconds (default: 10).
        connect_timeout_secs: Option<u64>,
    },
    /// Local SQLite file.
    Sqlite {
        /// Path to the database file.
        path: PathBuf,
    },
}

fn default_mysql_host() -> String {
    "127.0.0.1".to_string()
}

fn default_mysql_port() -> u16 {
    3306
}

fn default_mysql_database() -> String {
    "soil_carbon".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::Mysql {
            host: default_mysql_host(),
            port: default_mysql_port(),
            username: Some("root".to_string()),
            password: None,
            database: default_mysql_database(),
            connect_timeout_secs: None,
        }
    }
}

impl DatabaseConfig {
    /// Short backend name for logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Mysql { .. } => "mysql",
            Self::Sqlite { .. } => "sqlite",
        }
    }
}

/// Export output configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving exported files, created on demand.
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Configuration for tests: SQLite store and a relative export directory.
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::Sqlite {
                path: PathBuf::from("./data/soil.db"),
            },
            export: ExportConfig::default(),
        }
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> crate::Result<()> {
        self.server.bind.parse::<SocketAddr>().map_err(|e| {
            crate::Error::Config(format!("invalid bind address '{}': {e}", self.server.bind))
        })?;

        match &self.database {
            DatabaseConfig::Mysql {
                host,
                port,
                database,
                ..
            } => {
                if host.trim().is_empty() {
                    return Err(crate::Error::Config("database.host is empty".to_string()));
                }
                if *port == 0 {
                    return Err(crate::Error::Config("database.port must be non-zero".to_string()));
                }
                if database.trim().is_empty() {
                    return Err(crate::Error::Config(
                        "database.database is empty".to_string(),
                    ));
                }
            }
            DatabaseConfig::Sqlite { path } => {
                if path.as_os_str().is_empty() {
                    return Err(crate::Error::Config("database.path is empty".to_string()));
                }
            }
        }

        if self.export.dir.as_os_str().is_empty() {
            return Err(crate::Error::Config("export.dir is empty".to_string()));
        }

        Ok(())
    }
}
