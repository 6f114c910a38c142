//! Runtime Configuration
//!
//! All configuration comes from `PAYIT_`-prefixed environment variables,
//! optionally sourced from a `.env.local` file in the working directory or
//! its parent. Every required variable that is missing is reported in a
//! single error so an operator can fix the environment in one pass.

use payit_payments::ProductConfig;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    #[error("PAYIT_PRODUCT_PRICE_CENTS must be a positive integer")]
    InvalidPrice,
}

/// Runtime configuration required by the server.
#[derive(Clone, Debug)]
pub struct Config {
    pub stripe_secret_key: String,
    pub stripe_publishable_key: String,
    pub bind_addr: String,
    pub product: ProductConfig,
}

const REQUIRED_VARS: &[&str] = &[
    "PAYIT_STRIPE_SECRET_KEY",
    "PAYIT_STRIPE_PUBLISHABLE_KEY",
    "PAYIT_PRODUCT_NAME",
    "PAYIT_PRODUCT_DESCRIPTION",
    "PAYIT_PRODUCT_PRICE_CENTS",
    "PAYIT_PRODUCT_CURRENCY",
    "PAYIT_PRODUCT_SUCCESS_URL",
    "PAYIT_PRODUCT_CANCEL_URL",
];

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// A `.env.local` file, when present, supplies values for variables that
    /// are not already set.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::from_filename(".env.local").ok();
        dotenvy::from_filename("../.env.local").ok();

        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration through an injected lookup, keeping tests off the
    /// process environment.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|key| get(key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let price_cents = get("PAYIT_PRODUCT_PRICE_CENTS")
            .unwrap_or_default()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidPrice)?;
        if price_cents <= 0 {
            return Err(ConfigError::InvalidPrice);
        }

        // Required vars verified present above
        let require = |key: &str| get(key).unwrap_or_default();

        Ok(Self {
            stripe_secret_key: require("PAYIT_STRIPE_SECRET_KEY"),
            stripe_publishable_key: require("PAYIT_STRIPE_PUBLISHABLE_KEY"),
            bind_addr: get("PAYIT_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            product: ProductConfig {
                name: require("PAYIT_PRODUCT_NAME"),
                description: require("PAYIT_PRODUCT_DESCRIPTION"),
                price_cents,
                currency: require("PAYIT_PRODUCT_CURRENCY"),
                success_url: require("PAYIT_PRODUCT_SUCCESS_URL"),
                cancel_url: require("PAYIT_PRODUCT_CANCEL_URL"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("PAYIT_STRIPE_SECRET_KEY", "sk_test"),
            ("PAYIT_STRIPE_PUBLISHABLE_KEY", "pk_test"),
            ("PAYIT_PRODUCT_NAME", "Demo product"),
            ("PAYIT_PRODUCT_DESCRIPTION", "Great product"),
            ("PAYIT_PRODUCT_PRICE_CENTS", "1999"),
            ("PAYIT_PRODUCT_CURRENCY", "usd"),
            ("PAYIT_PRODUCT_SUCCESS_URL", "https://example.com/success"),
            ("PAYIT_PRODUCT_CANCEL_URL", "https://example.com/cancel"),
        ])
    }

    fn load(env: &HashMap<&str, &str>) -> Result<Config, ConfigError> {
        Config::load_from(|key| env.get(key).map(|v| (*v).to_string()))
    }

    #[test]
    fn test_load_success() {
        let config = load(&full_env()).unwrap();

        assert_eq!(config.stripe_secret_key, "sk_test");
        assert_eq!(config.product.price_cents, 1999);
        assert_eq!(config.product.currency, "usd");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_load_reports_all_missing_vars() {
        let mut env = full_env();
        env.remove("PAYIT_STRIPE_SECRET_KEY");
        env.remove("PAYIT_PRODUCT_CURRENCY");

        let err = load(&env).unwrap_err();
        let ConfigError::MissingVars(missing) = err else {
            panic!("expected MissingVars, got {err}");
        };
        assert!(missing.contains(&"PAYIT_STRIPE_SECRET_KEY".to_string()));
        assert!(missing.contains(&"PAYIT_PRODUCT_CURRENCY".to_string()));
    }

    #[test]
    fn test_load_treats_blank_as_missing() {
        let mut env = full_env();
        env.insert("PAYIT_PRODUCT_NAME", "   ");

        let err = load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVars(_)));
    }

    #[test]
    fn test_load_rejects_non_positive_price() {
        let mut env = full_env();
        env.insert("PAYIT_PRODUCT_PRICE_CENTS", "-1");
        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::InvalidPrice
        ));

        env.insert("PAYIT_PRODUCT_PRICE_CENTS", "nineteen");
        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::InvalidPrice
        ));
    }

    #[test]
    fn test_load_honors_bind_addr_override() {
        let mut env = full_env();
        env.insert("PAYIT_BIND_ADDR", "127.0.0.1:9999");

        let config = load(&env).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9999");
    }
}
