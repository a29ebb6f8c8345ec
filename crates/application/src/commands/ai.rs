use crate::ports::{CommandHandler, TextGenerator};
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};
use std::sync::Arc;
use tracing::warn;

/// `{question}.ai`: free text, hyphens already decoded to spaces by the
/// dispatcher's cache step.
pub struct AiCommand {
    generator: Arc<dyn TextGenerator>,
}

impl AiCommand {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl CommandHandler for AiCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let prompt = request.argument.trim();
        if prompt.is_empty() {
            return Err(DomainError::InvalidArgument("Empty question".to_string()));
        }

        let text = self.generator.generate(prompt).await.map_err(|e| {
            warn!(error = %e, "AI generation failed");
            DomainError::Upstream("Failed to generate AI response".to_string())
        })?;

        Ok(vec![text])
    }
}
