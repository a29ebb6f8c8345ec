use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError, RecordType};

pub const PI_A: &str = "3.14.15.92";
pub const PI_AAAA: &str = "3141:5926:5358:9793:2384:6264:3383:2795";

/// `pi`: digits of π, shaped to fit the question type.
pub struct PiCommand;

#[async_trait]
impl CommandHandler for PiCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let text = match request.record_type {
            RecordType::A => PI_A.to_string(),
            RecordType::AAAA => PI_AAAA.to_string(),
            RecordType::TXT => std::f64::consts::PI.to_string(),
        };
        Ok(vec![text])
    }
}
