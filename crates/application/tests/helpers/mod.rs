mod mock_providers;

pub use mock_providers::*;
