use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

const MAX_TOSSES: usize = 100;

/// `{n}.coin`: n tosses, one when the count is missing or zero.
pub struct CoinCommand;

#[async_trait]
impl CommandHandler for CoinCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let count = parse_count(&request.argument, MAX_TOSSES);
        let results: Vec<&str> = (0..count)
            .map(|_| if fastrand::bool() { "heads" } else { "tails" })
            .collect();
        Ok(vec![results.join(", ")])
    }
}

/// Leading-number count with a floor of one and a ceiling of `max`.
pub(crate) fn parse_count(argument: &str, max: usize) -> usize {
    let digits: String = argument.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<usize>().unwrap_or(0).clamp(1, max)
}
