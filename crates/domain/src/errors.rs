use thiserror::Error;

/// Failure categories reported back to DNS clients.
///
/// Every failure is answered as a TXT record of the form `Error: {message}`,
/// so the kind only matters for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ParseError,
    UnknownCommand,
    UpstreamError,
    InternalError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParseError => "parse_error",
            ErrorKind::UnknownCommand => "unknown_command",
            ErrorKind::UpstreamError => "upstream_error",
            ErrorKind::InternalError => "internal_error",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown query type")]
    UnknownCommand,

    #[error("{0}")]
    Upstream(String),

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("{0}")]
    Internal(String),

    #[error("Overlapping command rules: {0}")]
    OverlappingRules(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidArgument(_) | DomainError::InvalidDomainName(_) => {
                ErrorKind::ParseError
            }
            DomainError::UnknownCommand => ErrorKind::UnknownCommand,
            DomainError::Upstream(_) | DomainError::UpstreamTimeout(_) => {
                ErrorKind::UpstreamError
            }
            DomainError::Internal(_)
            | DomainError::OverlappingRules(_)
            | DomainError::ConfigError(_) => ErrorKind::InternalError,
        }
    }

    /// Single-line text placed in the TXT answer for this failure.
    pub fn to_answer_text(&self) -> String {
        format!("Error: {}", self)
    }
}
