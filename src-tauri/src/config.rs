use std::env;
use std::path::PathBuf;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const DB_PATH_VAR: &str = "SKATE_LOG_DB_PATH";
const MAX_CONNECTIONS_VAR: &str = "SKATE_LOG_MAX_CONNECTIONS";
const LOG_FILTER_VAR: &str = "SKATE_LOG_LOG_FILTER";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {name}: {value}")]
  Invalid { name: &'static str, value: String },
}

/// Environment configuration, read once at startup after `.env` is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  /// Overrides `<app data dir>/skate-log.db`
  pub db_path: Option<PathBuf>,
  pub max_connections: u32,
  /// Used when `RUST_LOG` is not set
  pub log_filter: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      db_path: None,
      max_connections: DEFAULT_MAX_CONNECTIONS,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let db_path = non_empty(DB_PATH_VAR).map(PathBuf::from);

    let max_connections = match non_empty(MAX_CONNECTIONS_VAR) {
      Some(value) => match value.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
          return Err(ConfigError::Invalid {
            name: MAX_CONNECTIONS_VAR,
            value,
          })
        }
      },
      None => DEFAULT_MAX_CONNECTIONS,
    };

    let log_filter = non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    Ok(Self {
      db_path,
      max_connections,
      log_filter,
    })
  }
}

fn non_empty(name: &str) -> Option<String> {
  env::var(name)
    .ok()
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}
