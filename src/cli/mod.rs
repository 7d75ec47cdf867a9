use crate::{CurrentTimeTool, FunctionFactory, NewsSearchTool, WeatherTool};
use clap::{Arg, Command};
use serde_json::json;
use tracing::info;

/// CLI entry point for invoking a single tool directly
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("formosa-agent")
        .version("0.1.0")
        .about("Invoke the weather, time, or news tool with a single argument")
        .arg(
            Arg::new("tool")
                .help("Which tool to invoke: weather, time, or news")
                .value_parser(["weather", "time", "news"])
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("query")
                .help("City name for weather/time, keyword for news")
                .required(true)
                .index(2),
        )
        .get_matches();

    let mut factory = FunctionFactory::new();
    factory.register_tool(WeatherTool::from_env());
    factory.register_tool(CurrentTimeTool::new());
    factory.register_tool(NewsSearchTool::new());

    let query = matches.get_one::<String>("query").unwrap();
    let (function_name, parameters) = match matches.get_one::<String>("tool").unwrap().as_str() {
        "weather" => ("get_weather", json!({ "city": query })),
        "time" => ("get_current_time", json!({ "city": query })),
        "news" => ("search_news", json!({ "keyword": query })),
        other => unreachable!("clap rejects unknown tool {other}"),
    };

    info!(tool = function_name, %query, "invoking tool");

    let outcome = factory.execute_function(function_name, parameters).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
