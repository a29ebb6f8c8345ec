use super::record_type_map::RecordTypeMapper;
use super::wire_response::UDP_DEFAULT_LIMIT;
use dnsrpc_domain::RecordType;

const MAX_NAME_LEN: usize = 253;
const HEADER_LEN: usize = 12;
const OPT_TYPE: u16 = 41;

/// The single question of an inbound DNS query, read straight off the wire.
#[derive(Debug, Clone)]
pub struct WireQuery {
    pub id: u16,
    pub recursion_desired: bool,
    /// Question type as sent, before folding into [`RecordType`].
    pub qtype: u16,
    pub record_type: RecordType,
    /// Byte offset where the question section ends.
    pub question_end: usize,
    /// Advertised EDNS0 UDP payload size, never below 512.
    pub client_max_size: u16,
    pub has_edns: bool,
    name: String,
}

impl WireQuery {
    /// Question name as sent, dot-separated, no trailing dot.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reads the header and question of a raw query.
///
/// Returns `None` for anything that cannot be answered:
///
/// * Buffer shorter than a header plus a root question
/// * QR bit set, or an OPCODE other than QUERY
/// * QDCOUNT other than 1
/// * Compression pointer or extended label type in the QNAME
/// * Truncated question, answer, authority or additional section
pub fn parse_query(buf: &[u8]) -> Option<WireQuery> {
    if buf.len() < HEADER_LEN + 5 {
        return None;
    }

    let id = u16::from_be_bytes([buf[0], buf[1]]);
    let flags = u16::from_be_bytes([buf[2], buf[3]]);

    // QR and OPCODE
    if flags & 0xF800 != 0 {
        return None;
    }

    let qdcount = u16::from_be_bytes([buf[4], buf[5]]);
    let ancount = u16::from_be_bytes([buf[6], buf[7]]);
    let nscount = u16::from_be_bytes([buf[8], buf[9]]);
    let arcount = u16::from_be_bytes([buf[10], buf[11]]);
    if qdcount != 1 {
        return None;
    }

    let mut pos = HEADER_LEN;
    let mut name = String::new();

    loop {
        let label_len = *buf.get(pos)? as usize;
        pos += 1;
        if label_len == 0 {
            break;
        }
        if label_len & 0xC0 != 0 {
            return None;
        }
        let label = buf.get(pos..pos + label_len)?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label));
        if name.len() > MAX_NAME_LEN {
            return None;
        }
        pos += label_len;
    }

    let question = buf.get(pos..pos + 4)?;
    let qtype = u16::from_be_bytes([question[0], question[1]]);
    pos += 4;

    let question_end = pos;
    let additional_start =
        skip_records(buf, question_end, ancount as usize + nscount as usize)?;
    let (client_max_size, has_edns) = read_edns(buf, additional_start, arcount)?;

    Some(WireQuery {
        id,
        recursion_desired: flags & 0x0100 != 0,
        qtype,
        record_type: RecordTypeMapper::from_wire(qtype),
        question_end,
        client_max_size,
        has_edns,
        name,
    })
}

/// Steps over `count` resource records starting at `pos`.
fn skip_records(buf: &[u8], mut pos: usize, count: usize) -> Option<usize> {
    for _ in 0..count {
        pos = skip_name(buf, pos)?;
        let fixed = buf.get(pos..pos + 10)?;
        let rdlen = u16::from_be_bytes([fixed[8], fixed[9]]) as usize;
        pos += 10 + rdlen;
    }
    Some(pos)
}

/// Walks the additional section looking for an OPT record.
fn read_edns(buf: &[u8], mut pos: usize, arcount: u16) -> Option<(u16, bool)> {
    let mut client_max_size = UDP_DEFAULT_LIMIT as u16;
    let mut has_edns = false;

    for _ in 0..arcount {
        if pos >= buf.len() {
            break;
        }
        // Only the root name is expected on OPT; skip others label by label.
        pos = skip_name(buf, pos)?;

        let fixed = buf.get(pos..pos + 10)?;
        let rr_type = u16::from_be_bytes([fixed[0], fixed[1]]);
        if rr_type == OPT_TYPE {
            has_edns = true;
            client_max_size =
                u16::from_be_bytes([fixed[2], fixed[3]]).max(UDP_DEFAULT_LIMIT as u16);
        }
        let rdlen = u16::from_be_bytes([fixed[8], fixed[9]]) as usize;
        pos += 10 + rdlen;
    }

    Some((client_max_size, has_edns))
}

fn skip_name(buf: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        let len = *buf.get(pos)? as usize;
        if len == 0 {
            return Some(pos + 1);
        }
        if len & 0xC0 == 0xC0 {
            return Some(pos + 2);
        }
        pos += 1 + len;
    }
}
