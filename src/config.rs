use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub allowed_origins: Vec<String>,
    pub db_connect_timeout: Duration,
    pub db_socket_timeout: Duration,
    pub max_body_size: usize,
    pub log_level: String,
}

/// Where the process is deployed. Hosted instances are short-lived and keep
/// a minimal pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_hosted(&self) -> bool {
        *self == Environment::Production
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_required = |key: &str| {
            lookup(key).ok_or_else(|| format!("Missing required environment variable: {key}"))
        };
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("FORMDESK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMDESK_HOST: {e}"))?;

        // PORT is what most hosting platforms inject.
        let port: u16 = lookup("FORMDESK_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|e| format!("Invalid FORMDESK_PORT: {e}"))?;

        let environment = match env_or("FORMDESK_ENV", "development").as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let allowed_origins: Vec<String> = env_or("FORMDESK_ALLOWED_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();

        for origin in &allowed_origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(format!(
                    "Invalid FORMDESK_ALLOWED_ORIGINS entry '{origin}': expected an http(s) origin"
                ));
            }
        }

        let db_connect_timeout: u64 = env_or("FORMDESK_DB_CONNECT_TIMEOUT_MS", "5000")
            .parse()
            .map_err(|e| format!("Invalid FORMDESK_DB_CONNECT_TIMEOUT_MS: {e}"))?;

        let db_socket_timeout: u64 = env_or("FORMDESK_DB_SOCKET_TIMEOUT_MS", "45000")
            .parse()
            .map_err(|e| format!("Invalid FORMDESK_DB_SOCKET_TIMEOUT_MS: {e}"))?;

        let max_body_size: usize = env_or("FORMDESK_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid FORMDESK_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMDESK_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            environment,
            allowed_origins,
            db_connect_timeout: Duration::from_millis(db_connect_timeout),
            db_socket_timeout: Duration::from_millis(db_socket_timeout),
            max_body_size,
            log_level,
        })
    }
}
