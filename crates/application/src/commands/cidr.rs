use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CidrBlock, CommandRequest, DomainError};

/// `{address}/{prefix}.cidr`: usable host range of a block.
pub struct CidrCommand;

#[async_trait]
impl CommandHandler for CidrCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let block = CidrBlock::parse(&request.argument)?;
        Ok(vec![block.describe()])
    }
}
