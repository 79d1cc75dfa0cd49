use std::{io::BufWriter, process::ExitCode, time::Duration};

use clap::Parser;
use tracing::info;

use ledger_state::{
    config::NodeConfig,
    fetch_snapshot, log,
    rippled::{LedgerSelector, RippledNodeHttp},
    snapshot::write_document,
};

/// Dumps the complete account state of one ledger as a single JSON document.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// rippled JSON-RPC URL.
    #[clap(short, long)]
    rippled: String,
    /// Ledger index number.
    #[clap(short, long)]
    index: Option<u32>,
    /// Ledger hash.
    #[clap(long)]
    hash: Option<String>,
    /// Pretty print output.
    #[clap(short, long)]
    pretty: bool,
    /// Give up on a single ledger_data call after this many seconds.
    #[clap(long)]
    timeout: Option<u64>,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let selector = LedgerSelector::from_args(cli.index, cli.hash)?;
    let config = NodeConfig::new(&cli.rippled, cli.timeout.map(Duration::from_secs))?;
    let node = RippledNodeHttp::new(&config)?;

    info!(ledger = %selector, url = %config.url, "dumping ledger state");

    let document = fetch_snapshot(&node, &selector).await?;

    info!(
        ledger_index = document.ledger_current_index,
        "fetched all ledger state, writing document"
    );

    let stdout = std::io::stdout();
    write_document(&document, cli.pretty, BufWriter::new(stdout.lock()))?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    log::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
