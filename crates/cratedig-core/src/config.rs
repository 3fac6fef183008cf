use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let discogs_api_key = require("DISCOGS_API_KEY")?;
    let discogs_api_secret = require("DISCOGS_API_SECRET")?;
    let shopify_shop_domain = require("SHOPIFY_SHOP_DOMAIN")?;
    let shopify_admin_token = require("SHOPIFY_ADMIN_TOKEN")?;

    let env = parse_environment(&or_default("CRATEDIG_ENV", "development"));
    let bind_addr = parse_addr("CRATEDIG_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CRATEDIG_LOG_LEVEL", "info");
    let shopify_api_version = or_default("SHOPIFY_API_VERSION", "2024-07");
    let currency = or_default("CRATEDIG_CURRENCY", "USD");
    let http_timeout_secs = parse_u64("CRATEDIG_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CRATEDIG_USER_AGENT", "cratedig/0.1 (+discogs-import)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        discogs_api_key,
        discogs_api_secret,
        shopify_shop_domain,
        shopify_admin_token,
        shopify_api_version,
        currency,
        http_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
