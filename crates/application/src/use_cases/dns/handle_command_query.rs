use crate::ports::ResultCachePort;
use crate::services::{CommandRegistry, RegisteredCommand};
use dnsrpc_domain::{
    decode_free_text, normalize_name, CommandKind, CommandRequest, DomainError, ErrorKind, Query,
};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

/// What the transport should answer with. Always at least one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub texts: Vec<String>,
    pub ttl: u32,
    pub command: Option<CommandKind>,
    pub cache_hit: bool,
    pub error: Option<ErrorKind>,
}

impl CommandResponse {
    fn success(command: CommandKind, texts: Vec<String>, ttl: u32, cache_hit: bool) -> Self {
        Self {
            texts,
            ttl,
            command: Some(command),
            cache_hit,
            error: None,
        }
    }

    fn failure(command: Option<CommandKind>, error: &DomainError, ttl: u32) -> Self {
        Self {
            texts: vec![error.to_answer_text()],
            ttl,
            command,
            cache_hit: false,
            error: Some(error.kind()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Routes a question name to its command and turns the outcome into answer
/// texts. Failures never escape: they become a single `Error: ...` text.
pub struct HandleCommandQueryUseCase {
    registry: Arc<CommandRegistry>,
    cache: Arc<dyn ResultCachePort>,
    error_ttl: u32,
}

impl HandleCommandQueryUseCase {
    pub fn new(
        registry: Arc<CommandRegistry>,
        cache: Arc<dyn ResultCachePort>,
        error_ttl: u32,
    ) -> Self {
        Self {
            registry,
            cache,
            error_ttl,
        }
    }

    pub async fn execute(&self, query: &Query) -> CommandResponse {
        let start = Instant::now();
        let name = normalize_name(&query.raw_name);

        let Some((entry, argument)) = self.registry.route(&name) else {
            debug!(name = %name, "No command matched");
            return CommandResponse::failure(None, &DomainError::UnknownCommand, self.error_ttl);
        };

        let command = &entry.command;
        let response = if command.cacheable {
            self.execute_cached(entry, argument, query).await
        } else {
            let request = CommandRequest::new(argument, query.record_type, query.client_ip);
            self.respond(entry, self.invoke(entry, &request).await)
        };

        debug!(
            command = %command.kind,
            cache_hit = response.cache_hit,
            error = response.error.map(|k| k.as_str()),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Command handled"
        );
        response
    }

    async fn execute_cached(
        &self,
        entry: &RegisteredCommand,
        argument: &str,
        query: &Query,
    ) -> CommandResponse {
        let key = decode_free_text(argument);

        if let Some(cached) = self.cache.get(&key) {
            debug!(command = %entry.command.kind, key = %key, "Cache hit");
            return CommandResponse::success(
                entry.command.kind,
                vec![cached],
                entry.command.ttl,
                true,
            );
        }

        let request = CommandRequest::new(key.clone(), query.record_type, query.client_ip);
        let result = self.invoke(entry, &request).await;

        if let Ok([text]) = result.as_deref() {
            self.cache.set(&key, text.clone());
        }

        self.respond(entry, result)
    }

    /// Runs the handler; a panic inside it is reported as an internal error.
    async fn invoke(
        &self,
        entry: &RegisteredCommand,
        request: &CommandRequest,
    ) -> Result<Vec<String>, DomainError> {
        match AssertUnwindSafe(entry.handler.execute(request))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(_) => {
                error!(command = %entry.command.kind, argument = %request.argument, "Command handler panicked");
                Err(DomainError::Internal("Internal server error".to_string()))
            }
        }
    }

    fn respond(
        &self,
        entry: &RegisteredCommand,
        result: Result<Vec<String>, DomainError>,
    ) -> CommandResponse {
        let kind = entry.command.kind;
        match result {
            Ok(texts) if texts.is_empty() => {
                warn!(command = %kind, "Command returned no answer");
                let err = DomainError::Internal("Empty response".to_string());
                CommandResponse::failure(Some(kind), &err, self.error_ttl)
            }
            Ok(texts) => CommandResponse::success(kind, texts, entry.command.ttl, false),
            Err(e) => {
                warn!(command = %kind, error = %e, kind = e.kind().as_str(), "Command failed");
                CommandResponse::failure(Some(kind), &e, self.error_ttl)
            }
        }
    }
}
