use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

const EXCUSES: &str = include_str!("../../data/excuses.txt");

/// `excuse`: a random line from the bundled list.
pub struct ExcuseCommand {
    excuses: Vec<&'static str>,
}

impl ExcuseCommand {
    pub fn new() -> Self {
        Self::from_lines(EXCUSES)
    }

    /// Blank lines and `#` comments are skipped.
    pub fn from_lines(text: &'static str) -> Self {
        let excuses = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Self { excuses }
    }

    pub fn len(&self) -> usize {
        self.excuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.excuses.is_empty()
    }
}

impl Default for ExcuseCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for ExcuseCommand {
    async fn execute(&self, _request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let excuse = fastrand::choice(&self.excuses)
            .ok_or_else(|| DomainError::Internal("No excuses available".to_string()))?;
        Ok(vec![excuse.to_string()])
    }
}
