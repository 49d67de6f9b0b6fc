use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use budget_connect::PlaidEnvironment;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub assets_dir: String,
    /// Public URL of this server, used by the bank link pages and OAuth redirect.
    pub app_url: String,
    pub plaid: PlaidConfig,
}

pub struct PlaidConfig {
    pub client_id: String,
    pub secret: String,
    pub client_name: String,
    pub environment: PlaidEnvironment,
    pub access_token: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from any variable source; `from_env` passes the process environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let env_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());
        let listen_addr: SocketAddr = env_or("BUDGET_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid BUDGET_LISTEN_ADDR")?;
        let db_path = env_or("BUDGET_DB_PATH", "./db/app.db");
        let cors_allow = env_or("BUDGET_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("BUDGET_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid BUDGET_REQUEST_TIMEOUT_MS")?;
        let assets_dir = env_or("BUDGET_ASSETS_DIR", "./assets");
        let app_url = env_or("APP_URL", "http://localhost:8080")
            .trim_end_matches('/')
            .to_string();

        let environment: PlaidEnvironment = env_or("PLAID_ENV", "sandbox")
            .parse()
            .context("Invalid PLAID_ENV")?;
        let plaid = PlaidConfig {
            client_id: env_or("PLAID_CLIENT_ID", ""),
            secret: env_or("PLAID_SECRET", ""),
            client_name: env_or("PLAID_CLIENT_NAME", "Budget Server"),
            environment,
            access_token: var("PLAID_ACCESS_TOKEN").filter(|t| !t.trim().is_empty()),
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            assets_dir,
            app_url,
            plaid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_path, "./db/app.db");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_millis(30000));
        assert_eq!(config.app_url, "http://localhost:8080");
        assert_eq!(config.plaid.environment, PlaidEnvironment::Sandbox);
        assert_eq!(config.plaid.client_name, "Budget Server");
        assert!(config.plaid.access_token.is_none());
    }

    #[test]
    fn explicit_values_are_used() {
        let config = config_from(&[
            ("BUDGET_REQUEST_TIMEOUT_MS", "1500"),
            ("APP_URL", "https://budget.example.com/"),
            ("PLAID_ENV", "production"),
            ("PLAID_ACCESS_TOKEN", "access-prod-1"),
        ])
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.app_url, "https://budget.example.com");
        assert_eq!(config.plaid.environment, PlaidEnvironment::Production);
        assert_eq!(config.plaid.access_token.as_deref(), Some("access-prod-1"));
    }

    #[test]
    fn malformed_timeout_is_a_startup_error() {
        let err = config_from(&[("BUDGET_REQUEST_TIMEOUT_MS", "30s")])
            .err()
            .unwrap();
        assert!(err.to_string().contains("BUDGET_REQUEST_TIMEOUT_MS"));
    }

    #[test]
    fn malformed_listen_addr_and_environment_are_startup_errors() {
        assert!(config_from(&[("BUDGET_LISTEN_ADDR", "localhost")]).is_err());
        assert!(config_from(&[("PLAID_ENV", "staging")]).is_err());
    }
}
