use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here, decoupled from the process environment,
/// so tests can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Unset and blank are treated the same for optional values.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PORTAL_ENV", "development"))?;

    let api_base_url = optional("PORTAL_API_BASE_URL");
    let api_token = optional("PORTAL_API_TOKEN");
    let log_level = or_default("PORTAL_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("PORTAL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PORTAL_USER_AGENT", "portal-cli/0.1 (catalogue-grouping)");
    let catalogue_per_page = parse_u32("PORTAL_CATALOGUE_PER_PAGE", "50")?;
    if catalogue_per_page == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PORTAL_CATALOGUE_PER_PAGE".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let catalogue_max_pages = parse_usize("PORTAL_CATALOGUE_MAX_PAGES", "200")?;
    let inter_request_delay_ms = parse_u64("PORTAL_INTER_REQUEST_DELAY_MS", "0")?;

    Ok(AppConfig {
        env,
        api_base_url,
        api_token,
        log_level,
        request_timeout_secs,
        user_agent,
        catalogue_per_page,
        catalogue_max_pages,
        inter_request_delay_ms,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PORTAL_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
