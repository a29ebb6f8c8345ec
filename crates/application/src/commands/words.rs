use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

const UNITS: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// `{n}.words`: British-style English spelling, up to 999 999.
pub struct WordsCommand;

#[async_trait]
impl CommandHandler for WordsCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let number: i64 = request
            .argument
            .parse()
            .map_err(|_| DomainError::InvalidArgument("Invalid number".to_string()))?;
        Ok(vec![number_to_words(number)])
    }
}

pub fn number_to_words(num: i64) -> String {
    if num == 0 {
        return "zero".to_string();
    }
    if num < 0 {
        return format!("minus {}", number_to_words_unsigned(num.unsigned_abs()));
    }
    number_to_words_unsigned(num as u64)
}

fn number_to_words_unsigned(num: u64) -> String {
    match num {
        0 => "zero".to_string(),
        1..=19 => UNITS[num as usize].to_string(),
        20..=99 => {
            let tens = TENS[(num / 10) as usize];
            match num % 10 {
                0 => tens.to_string(),
                unit => format!("{} {}", tens, UNITS[unit as usize]),
            }
        }
        100..=999 => {
            let hundreds = format!("{} hundred", UNITS[(num / 100) as usize]);
            match num % 100 {
                0 => hundreds,
                rest => format!("{} and {}", hundreds, number_to_words_unsigned(rest)),
            }
        }
        1_000..=999_999 => {
            let thousands = format!("{} thousand", number_to_words_unsigned(num / 1000));
            match num % 1000 {
                0 => thousands,
                rest if rest < 100 => {
                    format!("{} and {}", thousands, number_to_words_unsigned(rest))
                }
                rest => format!("{} {}", thousands, number_to_words_unsigned(rest)),
            }
        }
        _ => "number too large".to_string(),
    }
}
