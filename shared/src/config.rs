use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Client configuration, fixed at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without trailing slash; empty means same-origin
    pub backend_url: String,
    /// Re-fetch affected lists once a write resolves
    pub refetch_after_write: bool,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            refetch_after_write: true,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Build from raw environment values. Unset or unparseable values fall
    /// back to the defaults.
    pub fn from_values(
        backend_url: Option<&str>,
        refetch_after_write: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            refetch_after_write: refetch_after_write
                .and_then(parse_flag)
                .unwrap_or(defaults.refetch_after_write),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
