//! KeeeX CLI - command-line access to the local KeeeX API

mod commands;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use keeex_lib::config::{ENV_PORT, ENV_TIMEOUT, ENV_TOKEN, ENV_URL};
use keeex_lib::{KeeexClient, KeeexError};
use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use crate::commands::{Commands, Output};

/// Command-line client for the KeeeX local API.
///
/// Results are printed as JSON on stdout. Run `keeex token` once to obtain a
/// token, then pass it with --token or KEEEX_API_TOKEN.
#[derive(Debug, Parser)]
#[command(name = "keeex")]
#[command(version)]
#[command(about = "Command-line client for the KeeeX local API")]
struct Cli {
    /// API root URL [default: http://localhost:8288/kx/api]
    #[arg(long, global = true, env = ENV_URL, value_name = "URL")]
    url: Option<Url>,

    /// Port of the local API (ignored with --url)
    #[arg(long, global = true, env = ENV_PORT, value_name = "PORT")]
    port: Option<u16>,

    /// Authorization token
    #[arg(long, global = true, env = ENV_TOKEN, hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds [default: none]
    #[arg(long, global = true, env = ENV_TIMEOUT, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Api(#[from] KeeexError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            // Default: only rejected requests and failures
            0 => "warn".to_string(),
            // -v: token exchange
            1 => "warn,keeex_lib=info".to_string(),
            // -vv: every request span with URL and status
            2 => "info,keeex_lib=debug".to_string(),
            // -vvv+: everything, including reqwest/hyper internals
            _ => "debug,keeex_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        // One JSON object per event, for log processors
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Compact human-readable output on stderr, stdout stays for results
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn build_client(cli: &Cli) -> Result<KeeexClient, KeeexError> {
    let mut builder = KeeexClient::builder();
    if let Some(url) = &cli.url {
        builder = builder.base_url(url.clone());
    } else if let Some(port) = cli.port {
        builder = builder.port(port);
    }
    if let Some(token) = &cli.token {
        builder = builder.token(token.clone());
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

async fn run(cli: Cli) -> Result<Output, CliError> {
    let client = build_client(&cli)?;
    tracing::debug!(base_url = %client.base_url(), "client ready");
    commands::run(&client, cli.command).await
}

fn print(output: Output) -> Result<(), CliError> {
    match output {
        Output::Text(text) => println!("{text}"),
        Output::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json_logs);

    match run(cli).await.and_then(print) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
