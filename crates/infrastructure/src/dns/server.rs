use super::wire_query::parse_query;
use super::wire_response::{build_response, UDP_MAX_LIMIT};
use dnsrpc_application::use_cases::HandleCommandQueryUseCase;
use dnsrpc_domain::Query;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// Transport a query arrived on; decides how large a response may get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Udp,
    Tcp,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
        }
    }
}

/// Turns raw query bytes into raw response bytes. Shared by the UDP and TCP
/// listeners.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleCommandQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleCommandQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` for packets that carry no answerable question; those
    /// are dropped on UDP and end the connection on TCP.
    pub async fn handle_raw(
        &self,
        buf: &[u8],
        client_ip: IpAddr,
        transport: Transport,
    ) -> Option<Vec<u8>> {
        let Some(wire_query) = parse_query(buf) else {
            debug!(client = %client_ip, len = buf.len(), transport = transport.as_str(), "Dropping unparsable DNS packet");
            return None;
        };

        info!(
            name = %wire_query.name(),
            record_type = %wire_query.record_type,
            client = %client_ip,
            transport = transport.as_str(),
            "DNS query received"
        );

        let query = Query::new(wire_query.name(), wire_query.record_type, client_ip);
        let response = self.use_case.execute(&query).await;

        let max_size = match transport {
            Transport::Udp => (wire_query.client_max_size as usize).min(UDP_MAX_LIMIT),
            Transport::Tcp => u16::MAX as usize,
        };

        let bytes = build_response(&wire_query, buf, &response.texts, response.ttl, max_size)?;

        debug!(
            name = %wire_query.name(),
            answers = response.texts.len(),
            ttl = response.ttl,
            bytes = bytes.len(),
            "Sending response"
        );
        Some(bytes)
    }
}
