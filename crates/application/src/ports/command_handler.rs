use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

/// A single command behind a rule in the command table.
///
/// On success a handler returns the texts to answer with, one answer record
/// per text, in order.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError>;
}
