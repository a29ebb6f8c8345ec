use dnsrpc_application::commands::{build_registry, CommandDependencies};
use dnsrpc_application::use_cases::HandleCommandQueryUseCase;
use dnsrpc_domain::Config;
use dnsrpc_infrastructure::cache::TtlResultCache;
use dnsrpc_infrastructure::dns::DnsServerHandler;
use dnsrpc_infrastructure::providers::{
    build_http_client, ExchangeRateApiProvider, FreeDictionaryProvider, OpenAiTextGenerator,
    WttrWeatherProvider,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct Services {
    pub handler: DnsServerHandler,
    pub cache: Arc<TtlResultCache>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let providers = &config.providers;
        if providers.openai_api_key.is_none() {
            warn!("OPENAI_API_KEY not set, .ai queries will fail");
        }
        if providers.exchange_rate_api_key.is_none() {
            warn!("EXCHANGE_RATE_API_KEY not set, .fx queries will fail");
        }

        let client = build_http_client(Duration::from_secs(providers.timeout_secs))?;
        let deps = CommandDependencies {
            text_generator: Arc::new(OpenAiTextGenerator::new(client.clone(), providers)),
            exchange_rates: Arc::new(ExchangeRateApiProvider::new(client.clone(), providers)),
            weather: Arc::new(WttrWeatherProvider::new(client.clone(), providers)),
            dictionary: Arc::new(FreeDictionaryProvider::new(client, providers)),
        };

        let registry = build_registry(deps, &config.dns)?;
        info!(commands = registry.len(), "Command table ready");

        let cache = Arc::new(TtlResultCache::new(
            Duration::from_secs(config.cache.ttl_secs),
            config.cache.max_entries,
        ));

        let use_case = HandleCommandQueryUseCase::new(
            Arc::new(registry),
            cache.clone(),
            config.dns.default_ttl,
        );

        Ok(Self {
            handler: DnsServerHandler::new(Arc::new(use_case)),
            cache,
        })
    }
}
