use shared::AppConfig;

/// Configuration baked in at build time from `WHEREMYKIDSAT_*` variables
pub fn app_config() -> AppConfig {
    AppConfig::from_values(
        option_env!("WHEREMYKIDSAT_BACKEND_URL"),
        option_env!("WHEREMYKIDSAT_REFETCH_AFTER_WRITE"),
        option_env!("WHEREMYKIDSAT_LOG_LEVEL"),
    )
}
