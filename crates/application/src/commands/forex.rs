use crate::ports::{CommandHandler, ExchangeRateProvider};
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};
use std::sync::Arc;
use tracing::debug;

/// `{amount}{FROM}-{TO}.fx`
pub struct ForexCommand {
    rates: Arc<dyn ExchangeRateProvider>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForexRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ForexRequest {
    pub fn parse(argument: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidArgument("Invalid currency format".to_string());

        let (source, to) = argument.split_once('-').ok_or_else(invalid)?;
        let amount: String = source
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let from: String = source
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();

        let amount: f64 = amount.parse().map_err(|_| invalid())?;
        if from.is_empty() || to.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            amount,
            from: from.to_uppercase(),
            to: to.to_uppercase(),
        })
    }
}

impl ForexCommand {
    pub fn new(rates: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { rates }
    }
}

#[async_trait]
impl CommandHandler for ForexCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let forex = ForexRequest::parse(&request.argument)?;

        let rate = self
            .rates
            .rate(&forex.from, &forex.to)
            .await
            .map_err(|e| {
                debug!(error = %e, from = %forex.from, to = %forex.to, "Exchange rate lookup failed");
                DomainError::Upstream(format!("Could not convert {} to {}", forex.from, forex.to))
            })?;

        Ok(vec![format!(
            "{} {} = {:.2} {}",
            forex.amount,
            forex.from,
            forex.amount * rate,
            forex.to
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let forex = ForexRequest::parse("99usd-inr").unwrap();
        assert_eq!(forex.amount, 99.0);
        assert_eq!(forex.from, "USD");
        assert_eq!(forex.to, "INR");
    }

    #[test]
    fn test_parse_rejects_missing_parts() {
        assert!(ForexRequest::parse("usd-inr").is_err());
        assert!(ForexRequest::parse("99usd").is_err());
        assert!(ForexRequest::parse("99-inr").is_err());
    }
}
