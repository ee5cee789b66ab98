use std::net::SocketAddr;

use crate::models::Language;

/// Application-level constants
pub const APP_NAME: &str = "SympTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Location label used when a report carries none.
pub const DEFAULT_LOCATION_LABEL: &str = "Unknown";

/// A cluster escalates to HIGH once its count exceeds this.
pub const DEFAULT_OUTBREAK_THRESHOLD: u32 = 5;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

pub const ENV_BIND_ADDR: &str = "SYMPTRACK_BIND_ADDR";
pub const ENV_DEFAULT_LOCATION: &str = "SYMPTRACK_DEFAULT_LOCATION";
pub const ENV_OUTBREAK_THRESHOLD: &str = "SYMPTRACK_OUTBREAK_THRESHOLD";

/// Language codes accepted on input, in display order.
pub fn supported_languages() -> Vec<&'static str> {
    Language::ALL.iter().map(|l| l.as_str()).collect()
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "symptrack_lib=info,symptrack=info,tower_http=warn".to_string()
}

/// Blank or missing labels map to `default`; anything else is trimmed and
/// kept verbatim. No geographic normalization.
pub fn resolve_location_label(label: Option<&str>, default: &str) -> String {
    label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

// ═══════════════════════════════════════════════════════════
// Engine configuration
// ═══════════════════════════════════════════════════════════

/// Tunables for the classification engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_location: String,
    pub outbreak_high_threshold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION_LABEL.to_string(),
            outbreak_high_threshold: DEFAULT_OUTBREAK_THRESHOLD,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Service configuration
// ═══════════════════════════════════════════════════════════

/// Everything the HTTP service needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub engine: EngineConfig,
}

impl ServiceConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Absent or blank values
    /// fall back to defaults; present but unparseable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = match get(ENV_BIND_ADDR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: ENV_BIND_ADDR,
                expected: "socket address",
                value,
            })?,
            None => default_bind_addr(),
        };

        let outbreak_high_threshold = match get(ENV_OUTBREAK_THRESHOLD) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: ENV_OUTBREAK_THRESHOLD,
                expected: "non-negative integer",
                value,
            })?,
            None => DEFAULT_OUTBREAK_THRESHOLD,
        };

        let default_location = get(ENV_DEFAULT_LOCATION)
            .unwrap_or_else(|| DEFAULT_LOCATION_LABEL.to_string());

        Ok(Self {
            bind_addr,
            engine: EngineConfig {
                default_location,
                outbreak_high_threshold,
            },
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            engine: EngineConfig::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}
