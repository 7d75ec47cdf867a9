use super::county::resolve_county;
use super::Tool;
use crate::config::WeatherApiConfig;
use crate::error::LookupError;
use crate::types::ToolOutcome;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::pin::Pin;
use std::time::Duration;
use tracing::debug;

const FORECAST_PATH: &str = "/api/v1/rest/datastore/F-C0032-001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Parameters for weather queries
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WeatherParams {
    /// City or county to look up, aliases accepted (e.g. "台北")
    pub city: String,
}

/// CWA 36-hour forecast payload, reduced to the fields the report needs
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    success: Option<String>,
    records: Option<ForecastRecords>,
}

#[derive(Debug, Deserialize)]
struct ForecastRecords {
    #[serde(default)]
    location: Vec<ForecastLocation>,
}

#[derive(Debug, Deserialize)]
struct ForecastLocation {
    #[serde(rename = "weatherElement", default)]
    weather_element: Vec<WeatherElement>,
}

#[derive(Debug, Deserialize)]
struct WeatherElement {
    #[serde(rename = "elementName")]
    element_name: String,
    #[serde(default)]
    time: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
struct ForecastPeriod {
    parameter: ElementParameter,
}

#[derive(Debug, Deserialize)]
struct ElementParameter {
    #[serde(rename = "parameterName")]
    parameter_name: String,
}

/// Tool that reports the first period of the CWA 36-hour forecast for a
/// Taiwanese city or county
#[derive(Debug, Clone)]
pub struct WeatherTool {
    config: WeatherApiConfig,
    client: Client,
}

impl WeatherTool {
    /// Create the tool with an explicit configuration
    pub fn new(config: WeatherApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build the tool using the `CWB_API_KEY` environment variable
    pub fn from_env() -> Self {
        Self::new(WeatherApiConfig::from_env())
    }
}

impl Tool for WeatherTool {
    fn name(&self) -> &'static str {
        "get_weather"
    }

    fn description(&self) -> &'static str {
        "Get the 36-hour weather forecast for a city or county in Taiwan"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City or county name, common aliases accepted"
                }
            },
            "required": ["city"]
        })
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::ToolError>>
                + Send
                + '_,
        >,
    > {
        let client = self.client.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let params: WeatherParams = serde_json::from_value(parameters).map_err(|err| {
                crate::ToolError::InvalidParameters(err.to_string())
            })?;

            let city = resolve_county(&params.city).to_string();
            debug!(%city, "fetching forecast");

            let outcome: ToolOutcome = fetch_forecast(&client, &config, &city).await.into();
            outcome.into_value()
        })
    }
}

async fn fetch_forecast(
    client: &Client,
    config: &WeatherApiConfig,
    city: &str,
) -> Result<String, LookupError> {
    let url = format!("{}{}", config.base_url.trim_end_matches('/'), FORECAST_PATH);

    let response = client
        .get(&url)
        .query(&[
            ("Authorization", config.api_key.as_str()),
            ("format", "JSON"),
            ("locationName", city),
        ])
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|err| LookupError::Transport(format!("HTTP request error: {err}")))?
        .error_for_status()
        .map_err(|err| LookupError::Transport(format!("HTTP request error: {err}")))?;

    let payload: ForecastResponse = response
        .json()
        .await
        .map_err(|_| not_available(city))?;

    build_report(city, &payload)
}

fn build_report(city: &str, payload: &ForecastResponse) -> Result<String, LookupError> {
    match payload.success.as_deref() {
        Some("true") => {}
        Some(_) => {
            return Err(LookupError::UpstreamFormat(
                "API failed, check authorization or parameters.".to_string(),
            ))
        }
        None => return Err(not_available(city)),
    }

    let location = payload
        .records
        .as_ref()
        .and_then(|records| records.location.first())
        .ok_or_else(|| not_available(city))?;

    let elements: HashMap<&str, &[ForecastPeriod]> = location
        .weather_element
        .iter()
        .map(|element| (element.element_name.as_str(), element.time.as_slice()))
        .collect();

    let weather_desc = first_parameter(&elements, "Wx").ok_or_else(|| not_available(city))?;
    let min_temp = first_parameter(&elements, "MinT").ok_or_else(|| not_available(city))?;
    let max_temp = first_parameter(&elements, "MaxT").ok_or_else(|| not_available(city))?;

    Ok(format!(
        "The weather in {city} is '{weather_desc}' with a temperature range of \
         {min_temp} to {max_temp} degrees Celsius."
    ))
}

fn first_parameter<'a>(
    elements: &HashMap<&str, &'a [ForecastPeriod]>,
    name: &str,
) -> Option<&'a str> {
    elements
        .get(name)
        .and_then(|series| series.first())
        .map(|period| period.parameter.parameter_name.as_str())
}

fn not_available(city: &str) -> LookupError {
    LookupError::NotFound(format!("Weather information for '{city}' is not available."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forecast_payload() -> serde_json::Value {
        json!({
            "success": "true",
            "records": {
                "location": [{
                    "locationName": "臺北市",
                    "weatherElement": [
                        {"elementName": "Wx", "time": [
                            {"parameter": {"parameterName": "Cloudy"}},
                            {"parameter": {"parameterName": "Rainy"}}
                        ]},
                        {"elementName": "MinT", "time": [
                            {"parameter": {"parameterName": "20"}}
                        ]},
                        {"elementName": "MaxT", "time": [
                            {"parameter": {"parameterName": "25"}}
                        ]}
                    ]
                }]
            }
        })
    }

    #[test]
    fn test_report_from_first_period() {
        let payload: ForecastResponse = serde_json::from_value(forecast_payload()).unwrap();
        let report = build_report("臺北市", &payload).unwrap();
        assert_eq!(
            report,
            "The weather in 臺北市 is 'Cloudy' with a temperature range of \
             20 to 25 degrees Celsius."
        );
    }

    #[test]
    fn test_upstream_failure_flag() {
        let payload: ForecastResponse =
            serde_json::from_value(json!({"success": "false"})).unwrap();
        let err = build_report("臺北市", &payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "API failed, check authorization or parameters."
        );
    }

    #[test]
    fn test_missing_success_flag_reads_as_not_available() {
        let payload: ForecastResponse = serde_json::from_value(json!({})).unwrap();
        let err = build_report("臺北市", &payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Weather information for '臺北市' is not available."
        );
    }

    #[test]
    fn test_empty_location_list() {
        let payload: ForecastResponse = serde_json::from_value(json!({
            "success": "true",
            "records": {"location": []}
        }))
        .unwrap();
        let err = build_report("澎湖縣", &payload).unwrap_err();
        assert!(matches!(err, LookupError::NotFound(_)));
        assert!(err.to_string().contains("澎湖縣"));
    }

    #[test]
    fn test_missing_temperature_series() {
        let payload: ForecastResponse = serde_json::from_value(json!({
            "success": "true",
            "records": {
                "location": [{
                    "weatherElement": [
                        {"elementName": "Wx", "time": [
                            {"parameter": {"parameterName": "Sunny"}}
                        ]}
                    ]
                }]
            }
        }))
        .unwrap();
        let err = build_report("臺中市", &payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Weather information for '臺中市' is not available."
        );
    }

    #[test]
    fn test_empty_series_is_not_available() {
        let payload: ForecastResponse = serde_json::from_value(json!({
            "success": "true",
            "records": {
                "location": [{
                    "weatherElement": [
                        {"elementName": "Wx", "time": []},
                        {"elementName": "MinT", "time": []},
                        {"elementName": "MaxT", "time": []}
                    ]
                }]
            }
        }))
        .unwrap();
        assert!(build_report("高雄市", &payload).is_err());
    }
}
