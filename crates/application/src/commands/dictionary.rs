use crate::ports::{CommandHandler, DictionaryProvider};
use async_trait::async_trait;
use dnsrpc_domain::{decode_free_text, truncate_with_ellipsis, CommandRequest, DomainError};
use std::sync::Arc;
use tracing::debug;

/// `{word}.dict` answers `[part of speech] definition`.
pub struct DictionaryCommand {
    provider: Arc<dyn DictionaryProvider>,
}

impl DictionaryCommand {
    pub fn new(provider: Arc<dyn DictionaryProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CommandHandler for DictionaryCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let word = decode_free_text(&request.argument);

        let definition = self.provider.define(&word).await.map_err(|e| {
            debug!(error = %e, word = %word, "Dictionary lookup failed");
            DomainError::Upstream(format!("No definition found for: {}", word))
        })?;

        let text = format!("[{}] {}", definition.part_of_speech, definition.text);
        Ok(vec![truncate_with_ellipsis(&text)])
    }
}
