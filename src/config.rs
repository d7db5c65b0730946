use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use iconic_shared::Session;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub membership: MembershipConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Credentials handed over by the auth provider
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub is_iconic: bool,
}

impl SessionConfig {
    /// A session exists only when both the user id and the token are known
    pub fn to_session(&self) -> Option<Session> {
        match (&self.user_id, &self.token) {
            (Some(user_id), Some(token)) => Some(Session {
                user_id: user_id.to_owned(),
                token: token.to_owned(),
                is_iconic: self.is_iconic,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MembershipConfig {
    #[serde(default = "default_fee_mist")]
    pub fee_mist: u64,
    #[serde(default = "default_network_name")]
    pub network_name: String,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            fee_mist: default_fee_mist(),
            network_name: default_network_name(),
        }
    }
}

fn default_fee_mist() -> u64 {
    iconic_membership::Fee::ICONIC.mist()
}

fn default_network_name() -> String {
    "Sui Testnet".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (VITE_API_URL, ICONIC_TOKEN)
    /// 2. Environment variables (ICONIC__API__BASE_URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.timeout_secs", 10)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ICONIC")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_url) = env::var("VITE_API_URL") {
            builder = builder.set_override("api.base_url", api_url)?;
        }
        if let Ok(token) = env::var("ICONIC_TOKEN") {
            builder = builder.set_override("session.token", token)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.api.base_url)
            .map_err(|e| format!("API base URL is invalid: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("API base URL must use http or https".to_string());
        }
        if self.api.timeout_secs == 0 {
            return Err("API timeout must be greater than 0".to_string());
        }
        if self.membership.fee_mist == 0 {
            return Err("Membership fee must be greater than 0".to_string());
        }
        Ok(())
    }
}
