use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// A single inbound question, as handed over by the transport.
#[derive(Debug, Clone)]
pub struct Query {
    pub raw_name: Arc<str>,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
}

impl Query {
    pub fn new(raw_name: impl Into<Arc<str>>, record_type: RecordType, client_ip: IpAddr) -> Self {
        Self {
            raw_name: raw_name.into(),
            record_type,
            client_ip,
        }
    }
}

/// Input of a command handler: the argument left after stripping the
/// matched rule, plus the bits of the query some handlers need.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub argument: String,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
}

impl CommandRequest {
    pub fn new(argument: impl Into<String>, record_type: RecordType, client_ip: IpAddr) -> Self {
        Self {
            argument: argument.into(),
            record_type,
            client_ip,
        }
    }
}

/// Lowercases and trims a question name and drops the trailing root dot.
///
/// Total: names that cannot be understood simply match no command later on.
pub fn normalize_name(raw_name: &str) -> String {
    raw_name.trim().trim_end_matches('.').to_lowercase()
}

/// Hyphens stand in for spaces in free-text arguments.
pub fn decode_free_text(argument: &str) -> String {
    argument.replace('-', " ")
}
