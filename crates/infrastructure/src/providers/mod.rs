//! HTTP-backed implementations of the outbound provider ports.

pub mod dictionary_api;
pub mod exchange_rate;
pub mod http_client;
pub mod openai;
pub mod wttr;

pub use dictionary_api::FreeDictionaryProvider;
pub use exchange_rate::ExchangeRateApiProvider;
pub use http_client::build_http_client;
pub use openai::OpenAiTextGenerator;
pub use wttr::WttrWeatherProvider;
