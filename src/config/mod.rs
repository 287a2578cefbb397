//! Configuration loading and management
//!
//! Settings come from a YAML file, then environment variables override
//! individual fields:
//!
//! | Variable            | Field                    |
//! |---------------------|--------------------------|
//! | `WORKFORCE_HOST`    | `server.host`            |
//! | `WORKFORCE_PORT`    | `server.port`            |
//! | `WORKFORCE_STORAGE` | `storage.backend`        |
//! | `DATABASE_URL`      | `storage.database_url`   |
//! | `WORKFORCE_LOG`     | `logging.filter`         |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Variable naming the YAML file to load
pub const CONFIG_PATH_VAR: &str = "WORKFORCE_CONFIG";

/// File loaded when `WORKFORCE_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/workforce.yaml";

/// Where the HTTP server binds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Available storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(anyhow::anyhow!("unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            database_url: None,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set
    pub filter: String,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "workforce=info,tower_http=info".to_string(),
            json: false,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Resolve the file named by `WORKFORCE_CONFIG` (or the default path),
    /// then apply environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config = if Path::new(&path).exists() {
            Self::from_yaml_file(&path)?
        } else {
            Self::default()
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("WORKFORCE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("WORKFORCE_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("WORKFORCE_PORT is not a port number: {}", port))?;
        }
        if let Some(backend) = lookup("WORKFORCE_STORAGE") {
            self.storage.backend = backend.parse()?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database_url = Some(url);
        }
        if let Some(filter) = lookup("WORKFORCE_LOG") {
            self.logging.filter = filter;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.address(), "0.0.0.0:8080");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str(
            r#"
server:
  port: 9000
storage:
  backend: postgres
  database_url: postgres://localhost/workforce
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.storage.max_connections, 5);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  json: true").unwrap();
        let config = AppConfig::from_yaml_file(file.path()).unwrap();
        assert!(config.logging.json);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("WORKFORCE_PORT", "3000"),
            ("WORKFORCE_STORAGE", "postgresql"),
            ("DATABASE_URL", "postgres://db/workforce"),
            ("WORKFORCE_LOG", "debug"),
        ]);
        let config = AppConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(
            config.storage.database_url.as_deref(),
            Some("postgres://db/workforce")
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_bad_port_override_fails() {
        let result = AppConfig::default().with_overrides(|key| {
            (key == "WORKFORCE_PORT").then(|| "eighty".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_backend_fails() {
        assert!("mongodb".parse::<StorageBackend>().is_err());
        assert_eq!(
            "in-memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
    }
}
