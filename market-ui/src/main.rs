use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use market_ui::autocomplete::{AutocompleteConfig, Field, KeyUpOutcome};
use market_ui::page::Page;
use market_ui::stations::{StationClient, StationClientConfig, StationError};
use market_ui::table::{
    TableError, TradeFilter, TradeSortKey, filter_trades, load_trades, trades_table,
};

/// Environment variable holding the base URL of the trade page's server.
const BASE_URL_ENV: &str = "MARKET_UI_BASE_URL";

#[derive(Parser, Debug)]
#[command(about = "Drive the trade page's table sorter and station autocomplete")]
struct Cli {
    /// Base URL of the server hosting /search_station/
    #[arg(long)]
    base_url: Option<String>,
    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a trades JSON file, filter it, and print it sorted by a column
    Sort {
        trades: PathBuf,
        /// Zero-based column index, as if its header cell was clicked
        #[arg(long)]
        column: usize,
        /// Minimum total profit (ISK)
        #[arg(long, default_value_t = TradeFilter::default().min_profit)]
        min_profit: f64,
        /// Minimum margin as a fraction (0.15 = 15%)
        #[arg(long, default_value_t = TradeFilter::default().min_margin)]
        min_margin: f64,
        /// Source security must be above this; 0 disables the check
        #[arg(
            long,
            default_value_t = TradeFilter::default().security_filter,
            allow_hyphen_values = true
        )]
        security_filter: f64,
        /// Ranking used before truncation
        #[arg(long, default_value_t = TradeFilter::default().sort_by)]
        sort_by: TradeSortKey,
        /// Maximum number of trades shown
        #[arg(long, default_value_t = TradeFilter::default().limit)]
        limit: usize,
    },
    /// Type into a station input and print the resulting dropdown
    Lookup {
        /// source or destination
        field: Field,
        text: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Station(#[from] StationError),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let mut station_config = StationClientConfig::default().with_timeout_secs(cli.timeout_secs);
    if let Some(base_url) = cli.base_url.or_else(|| std::env::var(BASE_URL_ENV).ok()) {
        station_config = station_config.with_base_url(base_url);
    }
    let client = StationClient::new(station_config)?;

    match cli.command {
        Command::Sort {
            trades,
            column,
            min_profit,
            min_margin,
            security_filter,
            sort_by,
            limit,
        } => {
            let trades = load_trades(&trades)?;
            info!(count = trades.len(), "loaded trades");

            let filter = TradeFilter::default()
                .with_min_profit(min_profit)
                .with_min_margin(min_margin)
                .with_security_filter(security_filter)
                .with_sort_by(sort_by)
                .with_limit(limit);
            let trades = filter_trades(trades, &filter);

            let mut controller =
                Page::new(trades_table(&trades)).wire(client, AutocompleteConfig::default());
            controller.on_header_click(column)?;
            print!("{}", controller.table());
        }
        Command::Lookup { field, text } => {
            info!(url = client.search_url(), "using station search endpoint");

            // The table is irrelevant to a lookup; wire an empty one.
            let controller =
                Page::new(trades_table(&[])).wire(client, AutocompleteConfig::default());
            let outcome = controller.on_key_up(field, &text).await;
            if let KeyUpOutcome::Applied { .. } = outcome {
                for option in controller.dropdown(field).options() {
                    println!("{option}");
                }
            }
            if let Some(message) = unapplied_message(field, outcome) {
                eprintln!("{message}");
            }
            if outcome == KeyUpOutcome::Failed {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Explanation for a key release that left the dropdown unchanged.
fn unapplied_message(field: Field, outcome: KeyUpOutcome) -> Option<String> {
    match outcome {
        KeyUpOutcome::Applied { .. } => None,
        KeyUpOutcome::Skipped => Some(format!("query too short, {field} dropdown unchanged")),
        // A single lookup has nothing newer to be superseded by.
        KeyUpOutcome::Stale => Some(format!(
            "lookup superseded by a newer one, {field} dropdown unchanged"
        )),
        KeyUpOutcome::Failed => Some(format!("lookup failed, {field} dropdown unchanged")),
    }
}
