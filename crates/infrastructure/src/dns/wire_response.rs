use super::record_type_map::RecordTypeMapper;
use super::wire_query::WireQuery;
use dnsrpc_domain::{truncate_utf8, RecordType, MAX_TXT_BYTES};
use std::net::{Ipv4Addr, Ipv6Addr};

const HEADER_LEN: usize = 12;
const CLASS_IN: u16 = 1;
/// Pointer to the question name, which always starts right after the header.
const NAME_POINTER: [u8; 2] = [0xC0, 0x0C];
const OPT_RECORD: [u8; 11] = [
    0x00, 0x00, 0x29, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Plain-DNS ceiling when the client did not advertise EDNS0.
pub const UDP_DEFAULT_LIMIT: usize = 512;
/// Upper bound on what we are willing to send over UDP regardless of EDNS0.
pub const UDP_MAX_LIMIT: usize = 4096;

/// One answer in wire form, before it is placed behind the question.
struct EncodedAnswer {
    rtype: u16,
    rdata: Vec<u8>,
}

impl EncodedAnswer {
    /// A/AAAA questions get address records when the text is an address of
    /// the right family; everything else is a single-string TXT record.
    fn encode(record_type: RecordType, text: &str) -> Self {
        match record_type {
            RecordType::A => {
                if let Ok(addr) = text.parse::<Ipv4Addr>() {
                    return Self::address(RecordType::A, addr.octets().to_vec());
                }
            }
            RecordType::AAAA => {
                if let Ok(addr) = text.parse::<Ipv6Addr>() {
                    return Self::address(RecordType::AAAA, addr.octets().to_vec());
                }
            }
            RecordType::TXT => {}
        }

        let text = truncate_utf8(text, MAX_TXT_BYTES);
        let mut rdata = Vec::with_capacity(text.len() + 1);
        rdata.push(text.len() as u8);
        rdata.extend_from_slice(text.as_bytes());
        Self {
            rtype: RecordTypeMapper::to_wire(RecordType::TXT),
            rdata,
        }
    }

    fn address(record_type: RecordType, rdata: Vec<u8>) -> Self {
        Self {
            rtype: RecordTypeMapper::to_wire(record_type),
            rdata,
        }
    }

    fn wire_len(&self) -> usize {
        NAME_POINTER.len() + 10 + self.rdata.len()
    }

    fn write(&self, ttl: u32, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&NAME_POINTER);
        buf.extend_from_slice(&self.rtype.to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        buf.extend_from_slice(&ttl.to_be_bytes());
        buf.extend_from_slice(&(self.rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&self.rdata);
    }
}

/// Builds a NOERROR response echoing the question of `query_buf`, with one
/// answer per text, all sharing `ttl`.
///
/// When the full response would exceed `max_size` the answers are dropped
/// and the TC bit is set so the client retries over TCP.
///
/// When the client sent an EDNS0 OPT record, an OPT record is appended to the
/// additional section.
pub fn build_response(
    query: &WireQuery,
    query_buf: &[u8],
    texts: &[String],
    ttl: u32,
    max_size: usize,
) -> Option<Vec<u8>> {
    let question = query_buf.get(HEADER_LEN..query.question_end)?;

    let answers: Vec<EncodedAnswer> = texts
        .iter()
        .map(|text| EncodedAnswer::encode(query.record_type, text))
        .collect();

    let opt_size = if query.has_edns { OPT_RECORD.len() } else { 0 };
    let answers_size: usize = answers.iter().map(EncodedAnswer::wire_len).sum();
    let total_size = HEADER_LEN + question.len() + answers_size + opt_size;

    let truncated = total_size > max_size || answers.len() > u16::MAX as usize;
    let ancount = if truncated { 0 } else { answers.len() as u16 };

    let mut buf = Vec::with_capacity(if truncated {
        HEADER_LEN + question.len() + opt_size
    } else {
        total_size
    });

    buf.extend_from_slice(&query.id.to_be_bytes());
    let mut flags_hi = 0x80;
    if truncated {
        flags_hi |= 0x02;
    }
    if query.recursion_desired {
        flags_hi |= 0x01;
    }
    buf.push(flags_hi);
    buf.push(0x80);
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&ancount.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&u16::from(query.has_edns).to_be_bytes());

    buf.extend_from_slice(question);

    if !truncated {
        for answer in &answers {
            answer.write(ttl, &mut buf);
        }
    }

    if query.has_edns {
        buf.extend_from_slice(&OPT_RECORD);
    }

    Some(buf)
}
