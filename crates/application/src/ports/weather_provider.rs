use async_trait::async_trait;
use dnsrpc_domain::DomainError;

/// Current conditions, already formatted for display. Missing fields are
/// reported as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub temperature: String,
    pub condition: String,
    pub wind: String,
    pub precipitation: String,
}

impl WeatherReport {
    pub fn into_texts(self) -> Vec<String> {
        vec![
            self.temperature,
            self.condition,
            self.wind,
            self.precipitation,
        ]
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport, DomainError>;
}
