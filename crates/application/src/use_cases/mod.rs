pub mod dns;

pub use dns::{CommandResponse, HandleCommandQueryUseCase};
