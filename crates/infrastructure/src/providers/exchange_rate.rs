use super::http_client::{join_url, send_json};
use async_trait::async_trait;
use dnsrpc_application::ports::ExchangeRateProvider;
use dnsrpc_domain::config::ProvidersConfig;
use dnsrpc_domain::DomainError;
use serde::Deserialize;

const SERVICE: &str = "exchangerate-api";

#[derive(Deserialize)]
struct PairResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    conversion_rate: Option<f64>,
}

/// exchangerate-api.com pair endpoint: `{base}/{key}/pair/{from}/{to}`.
pub struct ExchangeRateApiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ExchangeRateApiProvider {
    pub fn new(client: reqwest::Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            base_url: config.exchange_rate_base_url.clone(),
            api_key: config.exchange_rate_api_key.clone(),
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    async fn rate(&self, from: &str, to: &str) -> Result<f64, DomainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DomainError::Upstream("Exchange rate API key not configured".to_string())
        })?;

        let url = join_url(&self.base_url, &[api_key, "pair", from, to])?;
        let response: PairResponse = send_json(SERVICE, self.client.get(url)).await?;

        match (response.result.as_deref(), response.conversion_rate) {
            (Some("success") | None, Some(rate)) => Ok(rate),
            (result, _) => Err(DomainError::Upstream(format!(
                "{} returned no rate (result: {})",
                SERVICE,
                result.unwrap_or("none")
            ))),
        }
    }
}
