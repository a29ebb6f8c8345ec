use crate::ports::CommandHandler;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use dnsrpc_domain::{CommandRequest, DomainError};

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M", "%H%M"];

const CITY_ZONES: &[(&str, Tz)] = &[
    ("mumbai", Tz::Asia__Kolkata),
    ("newyork", Tz::America__New_York),
    ("london", Tz::Europe__London),
    ("tokyo", Tz::Asia__Tokyo),
    ("sydney", Tz::Australia__Sydney),
    ("paris", Tz::Europe__Paris),
    ("berlin", Tz::Europe__Berlin),
    ("moscow", Tz::Europe__Moscow),
    ("beijing", Tz::Asia__Shanghai),
    ("dubai", Tz::Asia__Dubai),
    ("singapore", Tz::Asia__Singapore),
    ("toronto", Tz::America__Toronto),
    ("losangeles", Tz::America__Los_Angeles),
    ("chicago", Tz::America__Chicago),
    ("houston", Tz::America__Chicago),
    ("mexicocity", Tz::America__Mexico_City),
    ("santiago", Tz::America__Santiago),
    ("buenosaires", Tz::America__Argentina__Buenos_Aires),
    ("saopaulo", Tz::America__Sao_Paulo),
    ("johannesburg", Tz::Africa__Johannesburg),
    ("cairo", Tz::Africa__Cairo),
    ("lagos", Tz::Africa__Lagos),
    ("nairobi", Tz::Africa__Nairobi),
    ("casablanca", Tz::Africa__Casablanca),
];

/// Unknown cities fall back to UTC.
pub fn city_zone(city: &str) -> Tz {
    CITY_ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .map(|(_, tz)| *tz)
        .unwrap_or(Tz::UTC)
}

/// `{city}.time` or `{HH:MM}-{from}-{to}.time`.
pub struct TimeCommand {
    clock: fn() -> DateTime<Utc>,
}

impl TimeCommand {
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }

    fn city_time(&self, city: &str) -> String {
        let zone = city_zone(city);
        format_in_zone((self.clock)().with_timezone(&zone))
    }

    fn convert(&self, argument: &str) -> Result<String, DomainError> {
        let invalid = || DomainError::InvalidArgument("Invalid time format".to_string());

        let mut parts = argument.split('-');
        let (Some(time), Some(from), Some(to), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let time = TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
            .ok_or_else(invalid)?;

        let from = city_zone(from);
        let to = city_zone(to);
        let today = (self.clock)().with_timezone(&from).date_naive();

        let local = from
            .from_local_datetime(&NaiveDateTime::new(today, time))
            .earliest()
            .ok_or_else(invalid)?;

        Ok(format_in_zone(local.with_timezone(&to)))
    }
}

impl Default for TimeCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn format_in_zone(time: DateTime<Tz>) -> String {
    format!(
        "{} {}",
        time.format("%Y-%m-%d %H:%M:%S"),
        time.timezone().name()
    )
}

#[async_trait]
impl CommandHandler for TimeCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let text = if request.argument.contains('-') {
            self.convert(&request.argument)?
        } else {
            self.city_time(&request.argument)
        };
        Ok(vec![text])
    }
}
