use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default name of the exported sample table.
pub const DEFAULT_EXPORT_PATH: &str = "influence_samples.csv";

/// Seconds a relay waits for the webhook before giving up.
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 10;

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
/// Every variable has a default, so an empty environment yields a working
/// local setup with relaying disabled.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("INFLUENCE_ENV", "development"))?;

    let bind_addr = or_default("INFLUENCE_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("INFLUENCE_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("INFLUENCE_LOG_LEVEL", "info");

    let webhook_url = match lookup("INFLUENCE_WEBHOOK_URL") {
        Ok(raw) if raw.trim().is_empty() => None,
        Ok(raw) => {
            let url = raw.trim().to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid(
                    "INFLUENCE_WEBHOOK_URL",
                    "must start with http:// or https://".to_string(),
                ));
            }
            Some(url)
        }
        Err(_) => None,
    };

    let relay_timeout_secs = match lookup("INFLUENCE_RELAY_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| invalid("INFLUENCE_RELAY_TIMEOUT_SECS", e.to_string()))?,
        Err(_) => DEFAULT_RELAY_TIMEOUT_SECS,
    };
    if relay_timeout_secs == 0 {
        return Err(invalid(
            "INFLUENCE_RELAY_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let relay_user_agent = or_default(
        "INFLUENCE_RELAY_USER_AGENT",
        "influence/0.1 (questionnaire-relay)",
    );
    let export_path = PathBuf::from(or_default("INFLUENCE_EXPORT_PATH", DEFAULT_EXPORT_PATH));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        webhook_url,
        relay_timeout_secs,
        relay_user_agent,
        export_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "INFLUENCE_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
