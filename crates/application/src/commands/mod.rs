//! Command handlers and the table that routes names to them.

pub mod aerial;
pub mod ai;
pub mod base;
pub mod cidr;
pub mod coin;
pub mod dice;
pub mod dictionary;
pub mod epoch;
pub mod excuse;
pub mod forex;
pub mod help;
pub mod ip;
pub mod pi;
pub mod random;
pub mod sudoku;
pub mod time;
pub mod unit;
pub mod uuid;
pub mod weather;
pub mod words;

pub use aerial::AerialCommand;
pub use ai::AiCommand;
pub use base::BaseCommand;
pub use cidr::CidrCommand;
pub use coin::CoinCommand;
pub use dice::DiceCommand;
pub use dictionary::DictionaryCommand;
pub use epoch::EpochCommand;
pub use excuse::ExcuseCommand;
pub use forex::ForexCommand;
pub use help::HelpCommand;
pub use ip::IpCommand;
pub use pi::PiCommand;
pub use random::RandomCommand;
pub use sudoku::SudokuCommand;
pub use time::TimeCommand;
pub use unit::UnitCommand;
pub use uuid::UuidCommand;
pub use weather::WeatherCommand;
pub use words::WordsCommand;

use crate::ports::{DictionaryProvider, ExchangeRateProvider, TextGenerator, WeatherProvider};
use crate::services::CommandRegistry;
use dnsrpc_domain::config::DnsConfig;
use dnsrpc_domain::{Command, CommandKind, DomainError};
use std::sync::Arc;

/// Outbound collaborators needed by the network-backed commands.
#[derive(Clone)]
pub struct CommandDependencies {
    pub text_generator: Arc<dyn TextGenerator>,
    pub exchange_rates: Arc<dyn ExchangeRateProvider>,
    pub weather: Arc<dyn WeatherProvider>,
    pub dictionary: Arc<dyn DictionaryProvider>,
}

/// Builds the full command table in routing order.
pub fn build_registry(
    deps: CommandDependencies,
    dns: &DnsConfig,
) -> Result<CommandRegistry, DomainError> {
    let ttl = dns.default_ttl;

    CommandRegistry::builder()
        .register(
            Command::suffix(".time", CommandKind::Time, ttl),
            Arc::new(TimeCommand::new()),
        )
        .register(
            Command::suffix(".weather", CommandKind::Weather, ttl),
            Arc::new(WeatherCommand::new(deps.weather)),
        )
        .register(
            Command::suffix(".unit", CommandKind::Unit, ttl),
            Arc::new(UnitCommand),
        )
        .register(
            Command::suffix(".fx", CommandKind::Forex, ttl),
            Arc::new(ForexCommand::new(deps.exchange_rates)),
        )
        .register(Command::exact("ip", CommandKind::Ip, ttl), Arc::new(IpCommand))
        .register(
            Command::suffix(".words", CommandKind::Words, ttl),
            Arc::new(WordsCommand),
        )
        .register(Command::exact("pi", CommandKind::Pi, ttl), Arc::new(PiCommand))
        .register(
            Command::suffix(".ai", CommandKind::Ai, ttl).cached(),
            Arc::new(AiCommand::new(deps.text_generator)),
        )
        .register(
            Command::exact("help", CommandKind::Help, dns.help_ttl),
            Arc::new(HelpCommand),
        )
        .register(
            Command::suffix(".dice", CommandKind::Dice, ttl),
            Arc::new(DiceCommand),
        )
        .register(
            Command::suffix(".cidr", CommandKind::Cidr, ttl),
            Arc::new(CidrCommand),
        )
        .register(
            Command::suffix(".coin", CommandKind::Coin, ttl),
            Arc::new(CoinCommand),
        )
        .register(
            Command::suffix(".rand", CommandKind::Random, ttl),
            Arc::new(RandomCommand),
        )
        .register(
            Command::suffix(".epoch", CommandKind::Epoch, ttl),
            Arc::new(EpochCommand),
        )
        .register(
            Command::suffix(".aerial", CommandKind::Aerial, dns.aerial_ttl),
            Arc::new(AerialCommand),
        )
        .register(
            Command::suffix(".uuid", CommandKind::Uuid, ttl),
            Arc::new(UuidCommand),
        )
        .register(
            Command::suffix(".sudoku", CommandKind::Sudoku, ttl),
            Arc::new(SudokuCommand),
        )
        .register(
            Command::exact("excuse", CommandKind::Excuse, ttl),
            Arc::new(ExcuseCommand::new()),
        )
        .register(
            Command::suffix(".dict", CommandKind::Dictionary, ttl),
            Arc::new(DictionaryCommand::new(deps.dictionary)),
        )
        .register(
            Command::suffix(".base", CommandKind::Base, ttl),
            Arc::new(BaseCommand),
        )
        .build()
}
