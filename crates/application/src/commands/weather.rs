use crate::ports::{CommandHandler, WeatherProvider};
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};
use std::sync::Arc;
use tracing::debug;

/// `{city}.weather` answers with four records (temperature, condition, wind,
/// precipitation).
pub struct WeatherCommand {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherCommand {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CommandHandler for WeatherCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let city = request.argument.as_str();
        if city.is_empty() {
            return Err(DomainError::InvalidArgument("Missing city".to_string()));
        }

        let report = self.provider.current(city).await.map_err(|e| {
            debug!(error = %e, city = %city, "Weather lookup failed");
            DomainError::Upstream(format!("Could not fetch weather for {}", city))
        })?;

        Ok(report.into_texts())
    }
}
