use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::providers::ProvidersConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "dnsrpc.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsrpc/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address, transports)
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer TTL policy
    #[serde(default)]
    pub dns: DnsConfig,

    /// Result cache for generative answers
    #[serde(default)]
    pub cache: CacheConfig,

    /// Outbound HTTP providers
    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsrpc.toml in current directory
    /// 3. /etc/dnsrpc/config.toml
    /// 4. Default configuration
    ///
    /// Environment variables are applied on top of the file, CLI overrides
    /// on top of both.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Credentials and the resolution TTL hint come from the environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("OPENAI_API_KEY").filter(|k| !k.is_empty()) {
            self.providers.openai_api_key = Some(key);
        }
        if let Some(key) = lookup("EXCHANGE_RATE_API_KEY").filter(|k| !k.is_empty()) {
            self.providers.exchange_rate_api_key = Some(key);
        }
        if let Some(ttl) = lookup("DNS_TTL").and_then(|v| v.parse().ok()) {
            self.providers.dns_ttl_secs = ttl;
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if !self.server.udp && !self.server.tcp {
            return Err(ConfigError::Validation(
                "At least one of UDP or TCP must be enabled".to_string(),
            ));
        }

        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Cache TTL must be greater than 0".to_string(),
            ));
        }

        if self.cache.max_entries == Some(0) {
            return Err(ConfigError::Validation(
                "cache.max_entries must be greater than 0 when set".to_string(),
            ));
        }

        if self.providers.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Provider timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
