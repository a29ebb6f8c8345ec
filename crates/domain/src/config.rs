pub mod cache;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use providers::ProvidersConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
