/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Pretty-printed JSON responses from the OCCE API
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use occe_adapter::OcceError;
use occe_cli::{Command, OcceConfig};

#[derive(Parser, Debug)]
#[command(name = "occe-cli", version, about = "OCCE exchange command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<OcceError>() {
                Some(OcceError::Exchange { message }) => {
                    error!(reason = %message, "exchange API response error");
                }
                _ => error!(error = %format!("{err:#}"), "command failed"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => OcceConfig::default(),
    };

    let client = config.build_client(args.command.requires_auth())?;
    debug!(command = ?args.command, "running command");

    let response = args.command.run(&client).await?;
    let rendered = serde_json::to_string_pretty(&response).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<OcceConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    OcceConfig::from_file(path_str).context("load config")
}
