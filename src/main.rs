mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod market;
mod session;
mod sort;
mod token;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::market::{BackendClient, CoinGeckoClient, MarketDataSource};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Which market data source to read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// The public CoinGecko markets API
    Coingecko,
    /// A token dashboard backend service
    Backend,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Market data source to read from
        #[arg(long, value_enum, default_value_t = SourceKind::Coingecko)]
        source: SourceKind,

        /// Base URL of the backend service. Required with `--source backend`.
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,

        /// Reference currency for prices, overrides the configured one
        #[arg(long, value_name = "CURRENCY")]
        currency: Option<String>,

        /// Run without the terminal UI, logging to the console
        #[arg(long)]
        headless: bool,

        /// Disable background colors in the terminal UI
        #[arg(long)]
        no_background_color: bool,
    },
    /// Check that the data source is reachable
    Ping {
        /// Market data source to probe
        #[arg(long, value_enum, default_value_t = SourceKind::Coingecko)]
        source: SourceKind,

        /// Base URL of the backend service. Required with `--source backend`.
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,
    },
}

/// Builds the selected data source together with its display name.
fn build_source(
    kind: SourceKind,
    backend_url: Option<String>,
    environment: &Environment,
    vs_currency: &str,
) -> Result<(Arc<dyn MarketDataSource>, String), Box<dyn Error>> {
    match kind {
        SourceKind::Coingecko => {
            let client = CoinGeckoClient::new(environment.clone(), vs_currency.to_string());
            Ok((Arc::new(client), "CoinGecko".to_string()))
        }
        SourceKind::Backend => {
            let url = backend_url
                .ok_or("`--backend-url` is required with `--source backend`")?;
            let client = BackendClient::new(url);
            Ok((Arc::new(client), "Backend".to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();

    let args = Args::parse();
    match args.command {
        Command::Start {
            source,
            backend_url,
            currency,
            headless,
            no_background_color,
        } => {
            // Load the configured defaults, if a config file exists.
            let mut config = Config::default();
            if let Ok(config_path) = get_config_path() {
                if config_path.exists() {
                    if let Ok(loaded) = Config::load_from_file(&config_path) {
                        config = loaded;
                    }
                }
            }
            let vs_currency = currency.unwrap_or(config.vs_currency.clone());
            let initial_sort = config.initial_sort();

            let (client, source_name) =
                build_source(source, backend_url, &environment, &vs_currency)?;
            let session =
                setup_session(client, source_name, vs_currency, initial_sort).await;

            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::Ping {
            source,
            backend_url,
        } => {
            let (client, source_name) = build_source(source, backend_url, &environment, "usd")?;
            match client.heartbeat().await {
                Ok(says) => {
                    println!("{} is live: {}", source_name, says);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("{} heartbeat failed: {}", source_name, e);
                    Err(e.into())
                }
            }
        }
    }
}
