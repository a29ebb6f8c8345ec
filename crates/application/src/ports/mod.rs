mod command_handler;
mod dictionary_provider;
mod exchange_rate_provider;
mod result_cache_port;
mod text_generator;
mod weather_provider;

pub use command_handler::CommandHandler;
pub use dictionary_provider::{Definition, DictionaryProvider};
pub use exchange_rate_provider::ExchangeRateProvider;
pub use result_cache_port::ResultCachePort;
pub use text_generator::TextGenerator;
pub use weather_provider::{WeatherProvider, WeatherReport};
