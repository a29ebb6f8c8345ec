use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

/// `{number}[dec|hex|bin|oct]-{target}.base`
pub struct BaseCommand;

fn parse_source(token: &str) -> Option<i64> {
    let (digits, radix) = [("dec", 10), ("hex", 16), ("bin", 2), ("oct", 8)]
        .iter()
        .find_map(|(suffix, radix)| token.strip_suffix(suffix).map(|d| (d, *radix)))
        .unwrap_or((token, 10));
    i64::from_str_radix(digits, radix).ok()
}

fn render(value: i64, target: &str) -> Option<String> {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let digits = match target {
        "hex" => format!("{:X}", magnitude),
        "bin" => format!("{:b}", magnitude),
        "oct" => format!("{:o}", magnitude),
        "dec" => magnitude.to_string(),
        _ => return None,
    };
    Some(format!("{}{}", sign, digits))
}

pub fn convert_base(token: &str, target: &str) -> Result<String, DomainError> {
    let value = parse_source(token).ok_or_else(|| {
        DomainError::InvalidArgument("Invalid base conversion format".to_string())
    })?;
    let result = render(value, &target.to_lowercase())
        .ok_or_else(|| DomainError::InvalidArgument("Unsupported target base".to_string()))?;
    Ok(format!("{} = {}", token, result))
}

#[async_trait]
impl CommandHandler for BaseCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let (token, target) = request.argument.rsplit_once('-').ok_or_else(|| {
            DomainError::InvalidArgument("Invalid base conversion format".to_string())
        })?;
        Ok(vec![convert_base(token, target)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(convert_base("100dec", "hex").unwrap(), "100dec = 64");
        assert_eq!(convert_base("ffhex", "dec").unwrap(), "ffhex = 255");
        assert_eq!(convert_base("1010bin", "oct").unwrap(), "1010bin = 12");
        assert_eq!(convert_base("255", "HEX").unwrap(), "255 = FF");
        assert_eq!(convert_base("17oct", "bin").unwrap(), "17oct = 1111");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            convert_base("12", "roman").unwrap_err().to_string(),
            "Unsupported target base"
        );
        assert_eq!(
            convert_base("zzbin", "dec").unwrap_err().to_string(),
            "Invalid base conversion format"
        );
    }
}
