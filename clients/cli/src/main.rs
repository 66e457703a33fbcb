mod charts;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod employees;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod session;
mod stats;
mod ui;

use crate::config::{Config, clear_config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Employee dashboard: headcount, salary and payroll charts from the employee API
struct Args {
    /// Base URL of the employee API, overriding the config file
    #[arg(long, global = true, env = "DASHBOARD_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Paint a solid background behind the dashboard
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Load the dashboard once and print it
    Summary {
        /// Print the full snapshot as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
    /// Save the employee API base URL to the config file
    SetApiUrl {
        /// http(s) URL, e.g. http://localhost:5000/api
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the config file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start { with_background } => {
            let config = Config::load_or_default(&config_path)?;
            let api_url = config.resolve_api_url(args.api_url.as_deref(), environment);
            let session = setup_session(api_url, config.request_timeout())?;
            run_tui_mode(session, with_background).await
        }
        Command::Summary { json } => {
            let config = Config::load_or_default(&config_path)?;
            let api_url = config.resolve_api_url(args.api_url.as_deref(), environment);
            let session = setup_session(api_url, config.request_timeout())?;
            run_headless_mode(session, json).await
        }
        Command::SetApiUrl { url } => {
            validate_api_url(&url)?;
            let mut config = Config::load_or_default(&config_path)?;
            config.api_base_url = Some(url.clone());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("API URL saved", "{}", url);
            Ok(())
        }
        Command::ResetConfig => {
            print_cmd_info!("Resetting configuration", "{}", config_path.display());
            clear_config(&config_path).map_err(Into::into)
        }
    }
}

/// Accepts absolute http(s) URLs only.
fn validate_api_url(url: &str) -> Result<(), Box<dyn Error>> {
    let parsed = reqwest::Url::parse(url).map_err(|e| format!("Invalid API URL {}: {}", url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("Unsupported URL scheme '{}', expected http or https", scheme).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url() {
        assert!(validate_api_url("http://localhost:5000/api").is_ok());
        assert!(validate_api_url("https://hr.example.com/api").is_ok());
        assert!(validate_api_url("ftp://hr.example.com").is_err());
        assert!(validate_api_url("not a url").is_err());
    }

    #[test]
    fn test_args_parse_global_api_url() {
        let args = Args::try_parse_from([
            "employee-dashboard",
            "summary",
            "--json",
            "--api-url",
            "http://example/api",
        ])
        .unwrap();
        assert_eq!(args.api_url.as_deref(), Some("http://example/api"));
        assert!(matches!(args.command, Command::Summary { json: true }));
    }
}
