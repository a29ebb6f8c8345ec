use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

type Conversion = fn(f64) -> f64;

const CONVERSIONS: &[(&str, &str, Conversion)] = &[
    ("km", "mi", |km| km * 0.621371),
    ("mi", "km", |mi| mi * 1.60934),
    ("kg", "lb", |kg| kg * 2.20462),
    ("lb", "kg", |lb| lb * 0.453592),
    ("c", "f", |c| c * 9.0 / 5.0 + 32.0),
    ("f", "c", |f| (f - 32.0) * 5.0 / 9.0),
    ("m", "cm", |m| m * 100.0),
    ("cm", "m", |cm| cm / 100.0),
    ("m", "km", |m| m / 1000.0),
    ("km", "m", |km| km * 1000.0),
    ("cm", "km", |cm| cm / 100_000.0),
    ("km", "cm", |km| km * 100_000.0),
    ("miles", "km", |miles| miles * 1.60934),
    ("km", "miles", |km| km / 1.60934),
    ("miles", "m", |miles| miles * 1609.34),
];

/// `{value}{unit}-{target}.unit`
pub struct UnitCommand;

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

pub fn convert(value: f64, unit: &str, target: &str) -> Option<f64> {
    CONVERSIONS
        .iter()
        .find(|(from, to, _)| *from == unit && *to == target)
        .map(|(_, _, f)| f(value))
}

#[async_trait]
impl CommandHandler for UnitCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let invalid = || DomainError::InvalidArgument("Invalid unit conversion format".to_string());

        let (source, target) = request.argument.rsplit_once('-').ok_or_else(invalid)?;
        let number: String = source.chars().filter(|&c| is_numeric(c)).collect();
        let unit: String = source.chars().filter(|&c| !is_numeric(c)).collect();
        let value: f64 = number.parse().map_err(|_| invalid())?;

        let unit_key = unit.to_lowercase();
        let target_key = target.to_lowercase();
        let result = convert(value, &unit_key, &target_key).ok_or_else(|| {
            DomainError::InvalidArgument(format!(
                "Unsupported conversion: {} to {}",
                unit_key, target_key
            ))
        })?;

        Ok(vec![format!(
            "{}{} = {:.2}{}",
            value, unit, result, target
        )])
    }
}
