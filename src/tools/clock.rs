use super::Tool;
use crate::error::LookupError;
use crate::types::ToolOutcome;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Parameters for current-time queries
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TimeParams {
    /// City to report the current wall-clock time for
    pub city: String,
}

/// Tool that returns the current wall-clock time for a supported city
#[derive(Debug)]
pub struct CurrentTimeTool;

impl Default for CurrentTimeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrentTimeTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for CurrentTimeTool {
    fn name(&self) -> &'static str {
        "get_current_time"
    }

    fn description(&self) -> &'static str {
        "Get the current time in a specified city"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {"type": "string"}
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
        Box::pin(async move {
            let params: TimeParams = serde_json::from_value(parameters).map_err(|err| {
                crate::ToolError::InvalidParameters(err.to_string())
            })?;

            let outcome: ToolOutcome = lookup_timezone(&params.city)
                .map(|tz| format_time_report(&params.city, Utc::now().with_timezone(&tz)))
                .into();
            outcome.into_value()
        })
    }
}

/// Map a city name to its IANA timezone. Only New York is supported.
fn lookup_timezone(city: &str) -> Result<Tz, LookupError> {
    if city.eq_ignore_ascii_case("new york") {
        Ok(chrono_tz::America::New_York)
    } else {
        Err(LookupError::UnsupportedInput(format!(
            "Sorry, I don't have timezone information for {city}."
        )))
    }
}

fn format_time_report(city: &str, now: DateTime<Tz>) -> String {
    format!(
        "The current time in {city} is {}",
        now.format("%Y-%m-%d %H:%M:%S %Z%z")
    )
}
