use gloo::console;
use shared::LogLevel;

use crate::services::config::app_config;

/// Console logger tagging each line with the component that wrote it
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::is_enabled(app_config().log_level, level) {
            return;
        }

        let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
        let line = Self::format_line(&timestamp, level, component, message);
        match level {
            LogLevel::Debug => console::debug!(line),
            LogLevel::Info => console::info!(line),
            LogLevel::Warn => console::warn!(line),
            LogLevel::Error => console::error!(line),
        }
    }

    fn is_enabled(threshold: LogLevel, level: LogLevel) -> bool {
        level >= threshold
    }

    fn format_line(timestamp: &str, level: LogLevel, component: &str, message: &str) -> String {
        format!("{} {} [{}] {}", timestamp, level, component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_filters_lower_levels() {
        assert!(Logger::is_enabled(LogLevel::Info, LogLevel::Warn));
        assert!(Logger::is_enabled(LogLevel::Info, LogLevel::Info));
        assert!(!Logger::is_enabled(LogLevel::Info, LogLevel::Debug));
        assert!(!Logger::is_enabled(LogLevel::Error, LogLevel::Warn));
    }

    #[test]
    fn test_line_carries_component() {
        assert_eq!(
            Logger::format_line(
                "2025-03-01T08:00:00.000Z",
                LogLevel::Warn,
                "fetch",
                "GET /album?limit=12 failed"
            ),
            "2025-03-01T08:00:00.000Z warn [fetch] GET /album?limit=12 failed"
        );
    }
}
