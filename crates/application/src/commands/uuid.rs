use super::coin::parse_count;
use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

const MAX_UUIDS: usize = 10;

/// `{n}.uuid`: n random v4 UUIDs, one answer record each.
pub struct UuidCommand;

#[async_trait]
impl CommandHandler for UuidCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let count = parse_count(&request.argument, MAX_UUIDS);
        Ok((0..count)
            .map(|_| uuid::Uuid::new_v4().to_string())
            .collect())
    }
}
