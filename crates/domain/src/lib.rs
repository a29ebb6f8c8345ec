//! dnsrpc domain layer: query grammar, command table types, errors,
//! configuration and the pure algorithms behind the larger commands.
pub mod cidr;
pub mod command;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod sudoku;

pub use cidr::{CidrBlock, Ipv4Range};
pub use command::{Command, CommandKind, MatchRule};
pub use config::{CliOverrides, Config};
pub use dns_record::{truncate_utf8, truncate_with_ellipsis, RecordType, MAX_TXT_BYTES};
pub use dns_request::{decode_free_text, normalize_name, CommandRequest, Query};
pub use errors::{DomainError, ErrorKind};
pub use sudoku::Grid;
