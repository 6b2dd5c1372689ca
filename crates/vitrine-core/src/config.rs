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
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
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

    let shop_domain = require("VITRINE_SHOP_DOMAIN")?;
    let storefront_token = require("VITRINE_STOREFRONT_TOKEN")?;

    let env = parse_environment(&or_default("VITRINE_ENV", "development"));

    let bind_addr = parse_addr("VITRINE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("VITRINE_LOG_LEVEL", "info");
    let api_version = or_default("VITRINE_API_VERSION", "2024-10");

    let catalog_request_timeout_secs = parse_u64("VITRINE_CATALOG_REQUEST_TIMEOUT_SECS", "30")?;
    let catalog_user_agent =
        or_default("VITRINE_CATALOG_USER_AGENT", "vitrine/0.1 (storefront-proxy)");
    let catalog_max_retries = parse_u32("VITRINE_CATALOG_MAX_RETRIES", "1")?;
    let catalog_retry_backoff_base_secs =
        parse_u64("VITRINE_CATALOG_RETRY_BACKOFF_BASE_SECS", "1")?;

    let fetch_window = parse_u32("VITRINE_FETCH_WINDOW", "250")?;
    if fetch_window == 0 || fetch_window > 250 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VITRINE_FETCH_WINDOW".to_string(),
            reason: format!("must be between 1 and 250, got {fetch_window}"),
        });
    }

    let featured_collection = or_default("VITRINE_FEATURED_COLLECTION", "frontpage");
    let best_sellers_collection = or_default("VITRINE_BEST_SELLERS_COLLECTION", "best-sellers");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        shop_domain,
        storefront_token,
        api_version,
        catalog_request_timeout_secs,
        catalog_user_agent,
        catalog_max_retries,
        catalog_retry_backoff_base_secs,
        fetch_window,
        featured_collection,
        best_sellers_collection,
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

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("VITRINE_SHOP_DOMAIN", "demo-shop.myshopify.com");
        m.insert("VITRINE_STOREFRONT_TOKEN", "test-token");
        m
    }

    #[test]
    fn parse_environment_variants() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("production"), Environment::Production);
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_shop_domain() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "VITRINE_SHOP_DOMAIN"),
            "expected MissingEnvVar(VITRINE_SHOP_DOMAIN), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_without_storefront_token() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("VITRINE_SHOP_DOMAIN", "demo-shop.myshopify.com");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "VITRINE_STOREFRONT_TOKEN"),
            "expected MissingEnvVar(VITRINE_STOREFRONT_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("VITRINE_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VITRINE_BIND_ADDR"),
            "expected InvalidEnvVar(VITRINE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.shop_domain, "demo-shop.myshopify.com");
        assert_eq!(cfg.api_version, "2024-10");
        assert_eq!(cfg.catalog_request_timeout_secs, 30);
        assert_eq!(cfg.catalog_user_agent, "vitrine/0.1 (storefront-proxy)");
        assert_eq!(cfg.catalog_max_retries, 1);
        assert_eq!(cfg.catalog_retry_backoff_base_secs, 1);
        assert_eq!(cfg.fetch_window, 250);
        assert_eq!(cfg.featured_collection, "frontpage");
        assert_eq!(cfg.best_sellers_collection, "best-sellers");
    }

    #[test]
    fn fetch_window_override_applies() {
        let mut map = full_env();
        map.insert("VITRINE_FETCH_WINDOW", "50");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_window, 50);
    }

    #[test]
    fn fetch_window_zero_is_rejected() {
        let mut map = full_env();
        map.insert("VITRINE_FETCH_WINDOW", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VITRINE_FETCH_WINDOW"),
            "expected InvalidEnvVar(VITRINE_FETCH_WINDOW), got: {result:?}"
        );
    }

    #[test]
    fn fetch_window_above_upstream_cap_is_rejected() {
        let mut map = full_env();
        map.insert("VITRINE_FETCH_WINDOW", "500");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VITRINE_FETCH_WINDOW"),
            "expected InvalidEnvVar(VITRINE_FETCH_WINDOW), got: {result:?}"
        );
    }

    #[test]
    fn fetch_window_non_numeric_is_rejected() {
        let mut map = full_env();
        map.insert("VITRINE_FETCH_WINDOW", "lots");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VITRINE_FETCH_WINDOW"),
            "expected InvalidEnvVar(VITRINE_FETCH_WINDOW), got: {result:?}"
        );
    }

    #[test]
    fn retry_settings_override_applies() {
        let mut map = full_env();
        map.insert("VITRINE_CATALOG_MAX_RETRIES", "4");
        map.insert("VITRINE_CATALOG_RETRY_BACKOFF_BASE_SECS", "2");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.catalog_max_retries, 4);
        assert_eq!(cfg.catalog_retry_backoff_base_secs, 2);
    }

    #[test]
    fn collection_handle_overrides_apply() {
        let mut map = full_env();
        map.insert("VITRINE_FEATURED_COLLECTION", "homepage-picks");
        map.insert("VITRINE_BEST_SELLERS_COLLECTION", "top-movers");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.featured_collection, "homepage-picks");
        assert_eq!(cfg.best_sellers_collection, "top-movers");
    }

    #[test]
    fn debug_redacts_storefront_token() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-token"), "token leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
