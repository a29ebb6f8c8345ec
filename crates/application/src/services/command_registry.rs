use crate::ports::CommandHandler;
use dnsrpc_domain::{Command, DomainError};
use std::sync::Arc;
use tracing::debug;

pub struct RegisteredCommand {
    pub command: Command,
    pub handler: Arc<dyn CommandHandler>,
}

/// Ordered, immutable command table.
///
/// Rules are evaluated in declaration order and the first match wins.
/// Construction rejects tables where one name could match two rules, so the
/// order never has to break a tie.
pub struct CommandRegistry {
    entries: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    pub fn new(entries: Vec<RegisteredCommand>) -> Result<Self, DomainError> {
        for (i, entry) in entries.iter().enumerate() {
            for other in &entries[i + 1..] {
                if entry.command.rule.overlaps(&other.command.rule) {
                    return Err(DomainError::OverlappingRules(format!(
                        "{} ({}) and {} ({})",
                        entry.command.rule,
                        entry.command.kind,
                        other.command.rule,
                        other.command.kind
                    )));
                }
            }
        }

        debug!(commands = entries.len(), "Command registry built");
        Ok(Self { entries })
    }

    pub fn builder() -> CommandRegistryBuilder {
        CommandRegistryBuilder::default()
    }

    /// Finds the first rule matching an already normalized name and returns
    /// it together with the argument left after stripping the rule.
    pub fn route<'a>(&self, name: &'a str) -> Option<(&RegisteredCommand, &'a str)> {
        self.entries.iter().find_map(|entry| {
            entry
                .command
                .rule
                .match_argument(name)
                .map(|argument| (entry, argument))
        })
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.entries.iter().map(|entry| &entry.command)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Default)]
pub struct CommandRegistryBuilder {
    entries: Vec<RegisteredCommand>,
}

impl CommandRegistryBuilder {
    pub fn register(mut self, command: Command, handler: Arc<dyn CommandHandler>) -> Self {
        self.entries.push(RegisteredCommand { command, handler });
        self
    }

    pub fn build(self) -> Result<CommandRegistry, DomainError> {
        CommandRegistry::new(self.entries)
    }
}
