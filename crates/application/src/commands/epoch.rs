use crate::ports::CommandHandler;
use async_trait::async_trait;
use chrono::DateTime;
use dnsrpc_domain::{CommandRequest, DomainError};

/// `{timestamp}.epoch`: Unix time to ISO-8601 UTC.
///
/// The unit is guessed from the magnitude: seconds below 1e10, milliseconds
/// below 1e13, microseconds below 1e16, nanoseconds above.
pub struct EpochCommand;

pub fn epoch_to_millis(value: i64) -> i64 {
    if value < 10_000_000_000 {
        value.saturating_mul(1000)
    } else if value < 10_000_000_000_000 {
        value
    } else if value < 10_000_000_000_000_000 {
        value / 1000
    } else {
        value / 1_000_000
    }
}

#[async_trait]
impl CommandHandler for EpochCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let invalid = || DomainError::InvalidArgument("Invalid timestamp format".to_string());

        let value: i64 = request.argument.parse().map_err(|_| invalid())?;
        let date = DateTime::from_timestamp_millis(epoch_to_millis(value)).ok_or_else(invalid)?;

        Ok(vec![date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()])
    }
}
