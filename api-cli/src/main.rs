mod commands;
mod output;

use anyhow::Result;
use api_client::{ApiClient, Config};
use clap::{Parser, Subcommand};
use commands::{handle_resource, run_setup, ResourceCommands};
use output::{print_header, ExitCode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rest")]
#[command(about = "A command-line client for CRUD-style JSON APIs", long_about = None)]
struct Cli {
    /// Override the configured base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Resource(ResourceCommands),
    /// Interactive configuration
    Setup,
    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the active configuration
    Show,
}

fn setup_tracing() {
    // stdout carries the JSON envelopes, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Resource(cmd) => {
            let mut config = Config::load()?;
            if let Some(base_url) = cli.base_url {
                config.base_url = base_url;
            }
            let client = ApiClient::from_config(&config)?;
            handle_resource(&client, cmd).await?
        }
        Commands::Setup => run_setup().await?,
        Commands::Config(ConfigCommands::Show) => show_config()?,
    };

    if code != ExitCode::Success {
        std::process::exit(code.code());
    }
    Ok(())
}

fn show_config() -> Result<ExitCode> {
    let config = Config::load()?;
    print_header("Config file", &Config::config_path()?.display().to_string());
    print_header("Base URL", &config.base_url);
    print_header(
        "Token",
        if config.token.is_some() { "set" } else { "not set" },
    );
    if let Some(timeout) = config.timeout_secs {
        print_header("Timeout", &format!("{}s", timeout));
    }
    for (name, value) in &config.default_headers {
        print_header(&format!("Header {}", name), value);
    }
    Ok(ExitCode::Success)
}
