pub mod handle_command_query;

pub use handle_command_query::{CommandResponse, HandleCommandQueryUseCase};
