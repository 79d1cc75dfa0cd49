use std::{process::ExitCode, time::Duration};

use clap::Parser;
use tracing::info;

use ledger_state::{
    config::NodeConfig,
    fetch_circulating_supply, log,
    rippled::{LedgerSelector, RippledNodeHttp},
};

/// Reports the total XRP held by all accounts as of one validated ledger.
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
    /// Give up on a single ledger_data call after this many seconds.
    #[clap(long)]
    timeout: Option<u64>,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let selector = LedgerSelector::from_args(cli.index, cli.hash)?;
    let config = NodeConfig::new(&cli.rippled, cli.timeout.map(Duration::from_secs))?;
    let node = RippledNodeHttp::new(&config)?;

    info!(ledger = %selector, url = %config.url, "summing account balances");

    let supply = fetch_circulating_supply(&node, &selector).await?;

    info!(total_drops = %supply.total, "summed all account balances");

    for line in supply.lines() {
        println!("{line}");
    }

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
