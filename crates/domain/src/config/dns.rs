use serde::{Deserialize, Serialize};

/// TTLs stamped on answer records.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Computed and volatile answers, including error answers.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default = "default_help_ttl")]
    pub help_ttl: u32,

    #[serde(default = "default_aerial_ttl")]
    pub aerial_ttl: u32,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            help_ttl: default_help_ttl(),
            aerial_ttl: default_aerial_ttl(),
        }
    }
}

fn default_ttl() -> u32 {
    300
}

fn default_help_ttl() -> u32 {
    86_400
}

fn default_aerial_ttl() -> u32 {
    900
}
