use serde::{Deserialize, Serialize};

/// Outbound HTTP dependencies used by the network-backed commands.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Upper bound for a single outbound call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub openai_api_key: Option<String>,

    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,

    #[serde(default)]
    pub exchange_rate_api_key: Option<String>,

    #[serde(default = "default_exchange_rate_base_url")]
    pub exchange_rate_base_url: String,

    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,

    #[serde(default = "default_dictionary_base_url")]
    pub dictionary_base_url: String,

    /// Hint for how long resolved provider hostnames may be reused.
    #[serde(default = "default_dns_ttl_secs")]
    pub dns_ttl_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            openai_api_key: None,
            openai_base_url: default_openai_base_url(),
            openai_model: default_openai_model(),
            openai_max_tokens: default_openai_max_tokens(),
            exchange_rate_api_key: None,
            exchange_rate_base_url: default_exchange_rate_base_url(),
            weather_base_url: default_weather_base_url(),
            dictionary_base_url: default_dictionary_base_url(),
            dns_ttl_secs: default_dns_ttl_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini-2024-07-18".to_string()
}

fn default_openai_max_tokens() -> u32 {
    100
}

fn default_exchange_rate_base_url() -> String {
    "https://v6.exchangerate-api.com/v6".to_string()
}

fn default_weather_base_url() -> String {
    "https://wttr.in".to_string()
}

fn default_dictionary_base_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_dns_ttl_secs() -> u64 {
    30
}
