use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub static DEFAULT_SECRET_KEY: &str = "insecure-development-secret-key";
pub static DEFAULT_DATABASE_URL: &str = "sqlite://data/site.db?mode=rwc";
pub static DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub static DEFAULT_ADMIN_USERNAME: &str = "admin";
pub static DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Runtime configuration read from the environment.
///
/// Every value has a default so the site starts with no configuration at all, but the
/// secret key and admin password defaults are insecure and must be overridden in any real
/// deployment. See [`Config::insecure_defaults`].
#[derive(Clone, Debug)]
pub struct Config {
    pub secret_key: String,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub admin_username: String,
    pub admin_password: String,
    pub seed_sample_content: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str, default: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = get("INKWELL_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "INKWELL_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let seed_sample_content =
            parse_bool("INKWELL_SEED_SAMPLE_CONTENT", &get("INKWELL_SEED_SAMPLE_CONTENT", "false"))?;

        Ok(Self {
            secret_key: get("SECRET_KEY", DEFAULT_SECRET_KEY),
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr,
            admin_username: get("INKWELL_ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            admin_password: get("INKWELL_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            seed_sample_content,
        })
    }

    /// Names of the variables still set to their insecure development defaults.
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut vars = Vec::new();

        if self.secret_key == DEFAULT_SECRET_KEY {
            vars.push("SECRET_KEY");
        }
        if self.admin_password == DEFAULT_ADMIN_PASSWORD {
            vars.push("INKWELL_ADMIN_PASSWORD");
        }

        vars
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
