pub mod record_type_map;
pub mod server;
pub mod wire_query;
pub mod wire_response;

pub use record_type_map::RecordTypeMapper;
pub use server::{DnsServerHandler, Transport};
pub use wire_query::{parse_query, WireQuery};
