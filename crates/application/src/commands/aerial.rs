use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// `a{lat},{lng}/{lat},{lng}.aerial`: great-circle distance in kilometres.
///
/// The leading `a` keeps the first label from starting with a digit or a
/// minus sign and is optional.
pub struct AerialCommand;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    fn parse(text: &str) -> Option<Self> {
        let (lat, lng) = text.split_once(',')?;
        let lat: f64 = lat.parse().ok()?;
        let lng: f64 = lng.parse().ok()?;
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng))
            .then_some(Self { lat, lng })
    }
}

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[async_trait]
impl CommandHandler for AerialCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let invalid = || DomainError::InvalidArgument("Invalid coordinates format".to_string());

        let argument = request
            .argument
            .strip_prefix('a')
            .unwrap_or(&request.argument);
        let (first, second) = argument.split_once('/').ok_or_else(invalid)?;
        let first = Coordinate::parse(first).ok_or_else(invalid)?;
        let second = Coordinate::parse(second).ok_or_else(invalid)?;

        Ok(vec![format!(
            "aerial distance = {:.2} KM",
            haversine_km(first, second)
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = Coordinate {
            lat: 12.0,
            lng: 77.0,
        };
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Coordinate::parse("91,0").is_none());
        assert!(Coordinate::parse("0,181").is_none());
        assert!(Coordinate::parse("nan,0").is_none());
        assert!(Coordinate::parse("12.5").is_none());
    }
}
