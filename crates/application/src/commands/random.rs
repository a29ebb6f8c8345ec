use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

/// `{min}-{max}.rand`: a uniform integer in the inclusive range.
pub struct RandomCommand;

#[async_trait]
impl CommandHandler for RandomCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let invalid = || DomainError::InvalidArgument("Invalid range format".to_string());

        let (min, max) = request.argument.split_once('-').ok_or_else(invalid)?;
        let min: i64 = min.parse().map_err(|_| invalid())?;
        let max: i64 = max.parse().map_err(|_| invalid())?;
        if min > max {
            return Err(invalid());
        }

        Ok(vec![fastrand::i64(min..=max).to_string()])
    }
}
