use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use underwriting::LendingPolicy;

/// Top-level configuration for the CLI host.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) telemetry: TelemetryConfig,
    pub(crate) policy: LendingPolicy,
}

impl AppConfig {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let policy = match env::var("APP_POLICY_FILE") {
            Ok(path) => load_policy(PathBuf::from(path))?,
            Err(_) => LendingPolicy::default(),
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            policy,
        })
    }
}

fn load_policy(path: PathBuf) -> Result<LendingPolicy, ConfigError> {
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::PolicyFile {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::PolicyParse { path, source })
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub(crate) struct TelemetryConfig {
    pub(crate) log_level: String,
}

#[derive(Debug)]
pub(crate) enum ConfigError {
    PolicyFile {
        path: PathBuf,
        source: std::io::Error,
    },
    PolicyParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PolicyFile { path, .. } => {
                write!(f, "APP_POLICY_FILE {} is not readable", path.display())
            }
            ConfigError::PolicyParse { path, .. } => {
                write!(
                    f,
                    "APP_POLICY_FILE {} is not a valid policy document",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::PolicyFile { source, .. } => Some(source),
            ConfigError::PolicyParse { source, .. } => Some(source),
        }
    }
}
