use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("ask a question to an AI model", "dig what-is-the-capital-of-india.ai @localhost"),
    ("get time for a city", "dig mumbai.time @localhost"),
    ("convert currency rates", "dig 99USD-INR.fx @localhost"),
    ("get your host's requesting IP", "dig ip @localhost"),
    ("get weather forecast for a city", "dig ahmedabad.weather @localhost"),
    ("convert between units", "dig 42km-cm.unit @localhost"),
    ("convert numbers to words", "dig 123456.words @localhost"),
    ("convert cidr to ip range", "dig 10.100.0.0/24.cidr @localhost"),
    ("return digits of Pi as TXT or A or AAAA record", "dig pi @localhost"),
    ("convert numbers from one base to another", "dig 100dec-hex.base @localhost"),
    ("get the definition of an English word", "dig fun.dict @localhost"),
    ("roll dice", "dig 1d6.dice @localhost"),
    ("generate random numbers", "dig 1-100.rand @localhost"),
    ("toss coin", "dig 2.coin @localhost"),
    ("convert epoch / UNIX time to human readable time", "dig 784783800.epoch @localhost"),
    ("get aerial distance between lat lng pair", "dig A12.9352,77.6245/12.9698,77.7500.aerial @localhost"),
    ("generate random UUID-v4s", "dig 2.uuid @localhost"),
    (
        "solve a sudoku puzzle",
        "dig 002840003.076000000.100006050.030080000.007503200.000020010.080100004.000000730.700064500.sudoku @localhost",
    ),
    ("return a developer excuse", "dig excuse @localhost"),
];

/// `help`: one answer per command.
pub struct HelpCommand;

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn execute(&self, _request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        Ok(HELP_ENTRIES
            .iter()
            .map(|(desc, example)| format!("{} \"{}\"", desc, example))
            .collect())
    }
}
