use super::http_client::{join_url, send_json};
use async_trait::async_trait;
use dnsrpc_application::ports::{WeatherProvider, WeatherReport};
use dnsrpc_domain::config::ProvidersConfig;
use dnsrpc_domain::DomainError;
use serde::Deserialize;

const SERVICE: &str = "wttr.in";
const MISSING: &str = "N/A";

#[derive(Deserialize, Default)]
struct WttrResponse {
    #[serde(default)]
    current_condition: Vec<CurrentCondition>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CurrentCondition {
    #[serde(rename = "temp_C", default)]
    temp_c: Option<String>,
    #[serde(default)]
    weather_desc: Vec<Described>,
    #[serde(default)]
    windspeed_kmph: Option<String>,
    #[serde(rename = "precipMM", default)]
    precip_mm: Option<String>,
}

#[derive(Deserialize)]
struct Described {
    value: String,
}

fn with_unit(value: Option<String>, unit: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("{}{}", v, unit),
        _ => MISSING.to_string(),
    }
}

impl From<CurrentCondition> for WeatherReport {
    fn from(current: CurrentCondition) -> Self {
        let condition = current
            .weather_desc
            .into_iter()
            .map(|d| d.value)
            .find(|v| !v.is_empty())
            .unwrap_or_else(|| MISSING.to_string());

        WeatherReport {
            temperature: with_unit(current.temp_c, "C"),
            condition,
            wind: with_unit(current.windspeed_kmph, "km/h"),
            precipitation: with_unit(current.precip_mm, "mm"),
        }
    }
}

/// Current conditions from wttr.in's JSON format (`?format=j1`).
pub struct WttrWeatherProvider {
    client: reqwest::Client,
    base_url: String,
}

impl WttrWeatherProvider {
    pub fn new(client: reqwest::Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            base_url: config.weather_base_url.clone(),
        }
    }
}

#[async_trait]
impl WeatherProvider for WttrWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, DomainError> {
        let mut url = join_url(&self.base_url, &[city])?;
        url.query_pairs_mut().append_pair("format", "j1");

        let response: WttrResponse = send_json(SERVICE, self.client.get(url)).await?;
        let current = response
            .current_condition
            .into_iter()
            .next()
            .unwrap_or_default();

        Ok(current.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_j1() {
        let body = r#"{"current_condition":[{"temp_C":"31","weatherDesc":[{"value":"Sunny"}],"windspeedKmph":"12","precipMM":""}]}"#;
        let response: WttrResponse = serde_json::from_str(body).unwrap();
        let report: WeatherReport = response.current_condition.into_iter().next().unwrap().into();
        assert_eq!(
            report.into_texts(),
            vec!["31C", "Sunny", "12km/h", "N/A"]
        );
    }

    #[test]
    fn test_missing_condition_is_all_na() {
        let response: WttrResponse = serde_json::from_str("{}").unwrap();
        assert!(response.current_condition.is_empty());
        let report: WeatherReport = CurrentCondition::default().into();
        assert_eq!(report.condition, "N/A");
        assert_eq!(report.temperature, "N/A");
    }
}
