use async_trait::async_trait;
use dnsrpc_domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub part_of_speech: String,
    pub text: String,
}

#[async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// First definition of the first meaning of `word`.
    async fn define(&self, word: &str) -> Result<Definition, DomainError>;
}
