use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

/// `ip`: the address the query came from.
pub struct IpCommand;

#[async_trait]
impl CommandHandler for IpCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        Ok(vec![request.client_ip.to_string()])
    }
}
