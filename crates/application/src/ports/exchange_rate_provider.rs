use async_trait::async_trait;
use dnsrpc_domain::DomainError;

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Units of `to` per one unit of `from`. Codes are ISO 4217, uppercase.
    async fn rate(&self, from: &str, to: &str) -> Result<f64, DomainError>;
}
