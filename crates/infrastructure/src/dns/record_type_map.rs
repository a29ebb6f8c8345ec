//! Mapping between wire question types and the record types commands can
//! answer with.

use dnsrpc_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::TXT => HickoryRecordType::TXT,
        }
    }

    /// A and AAAA keep their type; every other question is answered as TXT.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            _ => RecordType::TXT,
        }
    }

    pub fn from_wire(qtype: u16) -> RecordType {
        Self::from_hickory(HickoryRecordType::from(qtype))
    }

    pub fn to_wire(record_type: RecordType) -> u16 {
        u16::from(Self::to_hickory(record_type))
    }
}
