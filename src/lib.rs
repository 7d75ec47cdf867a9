//! formosa-agent: agent tool callbacks for Taiwan weather, clock, and news
//!
//! This library provides the tool side of a conversational agent: callbacks
//! an external agent runtime registers and invokes by name with a free-text
//! argument. Each tool returns a status-tagged outcome the runtime renders
//! to the end user.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use formosa_agent::{CurrentTimeTool, FunctionFactory, NewsSearchTool, WeatherTool};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut factory = FunctionFactory::new();
//!     factory.register_tool(WeatherTool::from_env());
//!     factory.register_tool(CurrentTimeTool::new());
//!     factory.register_tool(NewsSearchTool::new());
//!
//!     let outcome = factory
//!         .execute_function("get_weather", json!({"city": "台北"}))
//!         .await?;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod tools;
pub mod types;

pub use config::WeatherApiConfig;
pub use error::{LookupError, Result, ToolError};
pub use tools::{
    resolve_county, CurrentTimeTool, FunctionFactory, NewsSearchTool, Tool, ToolRegistry,
    WeatherTool,
};
pub use types::ToolOutcome;

#[cfg(feature = "cli")]
pub mod cli;
