use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

const MAX_DICE: u32 = 100;

/// `{count}d{sides}[/{modifier}].dice`
pub struct DiceCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceNotation {
    pub count: u32,
    pub sides: u32,
    pub modifier: i64,
}

impl DiceNotation {
    pub fn parse(notation: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidArgument("Invalid dice notation".to_string());

        let (dice, modifier) = match notation.split_once('/') {
            Some((dice, modifier)) => (dice, modifier.parse().unwrap_or(0)),
            None => (notation, 0),
        };

        let (count, sides) = dice.split_once('d').ok_or_else(invalid)?;
        let count: u32 = count.parse().map_err(|_| invalid())?;
        let sides: u32 = sides.parse().map_err(|_| invalid())?;

        if count < 1 || sides < 1 || count > MAX_DICE {
            return Err(invalid());
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Fails when the modifier pushes the total out of `i64` range.
    pub fn roll(&self) -> Result<(Vec<u32>, i64), DomainError> {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| fastrand::u32(1..=self.sides))
            .collect();
        let total = rolls
            .iter()
            .map(|&r| i64::from(r))
            .sum::<i64>()
            .checked_add(self.modifier)
            .ok_or_else(|| DomainError::InvalidArgument("Invalid dice notation".to_string()))?;
        Ok((rolls, total))
    }
}

#[async_trait]
impl CommandHandler for DiceCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let notation = DiceNotation::parse(&request.argument)?;
        let (rolls, total) = notation.roll()?;
        let rolls = rolls
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Ok(vec![format!("Rolls: [{}] Total: {}", rolls, total)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_modifier() {
        let notation = DiceNotation::parse("3d8/2").unwrap();
        assert_eq!(
            notation,
            DiceNotation {
                count: 3,
                sides: 8,
                modifier: 2
            }
        );
    }

    #[test]
    fn test_unparsable_modifier_is_zero() {
        assert_eq!(DiceNotation::parse("1d6/x").unwrap().modifier, 0);
    }

    #[test]
    fn test_rejects_bad_notation() {
        assert!(DiceNotation::parse("0d6").is_err());
        assert!(DiceNotation::parse("2d0").is_err());
        assert!(DiceNotation::parse("d6").is_err());
        assert!(DiceNotation::parse("six").is_err());
        assert!(DiceNotation::parse("101d6").is_err());
    }

    #[test]
    fn test_roll_bounds() {
        let notation = DiceNotation::parse("20d6/-3").unwrap();
        let (rolls, total) = notation.roll().unwrap();
        assert_eq!(rolls.len(), 20);
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        assert_eq!(total, rolls.iter().map(|&r| i64::from(r)).sum::<i64>() - 3);
    }

    #[test]
    fn test_modifier_overflow_is_rejected() {
        let notation = DiceNotation::parse("1d6/9223372036854775807").unwrap();
        assert!(matches!(
            notation.roll(),
            Err(DomainError::InvalidArgument(msg)) if msg == "Invalid dice notation"
        ));

        let notation = DiceNotation::parse("1d6/-9223372036854775808").unwrap();
        assert!(notation.roll().is_ok());
    }
}
