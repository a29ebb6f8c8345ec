use async_trait::async_trait;
use dnsrpc_domain::DomainError;

/// Generative backend answering free-text questions.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
