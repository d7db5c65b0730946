mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use iconic_shared::{EventId, ViewTab};

/// iconic - event tickets and ICONIC membership
#[derive(Parser)]
#[command(name = "iconic")]
#[command(about = "Browse events, join them and become ICONIC", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the events of a tab with what a join would do
    Events {
        /// events or my-tickets
        #[arg(long, default_value = "events")]
        tab: ViewTab,
    },
    /// Join a recommended event
    Join {
        event_id: EventId,
    },
    /// Become ICONIC with a fee payment signed in your wallet
    Upgrade {
        /// Transaction id of the fee payment
        #[arg(long)]
        tx_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = iconic::Config::load(args.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    iconic::observability::init_observability(
        "iconic",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match args.command {
        Commands::Events { tab } => cli::events::list(config, tab).await,
        Commands::Join { event_id } => cli::join::join(config, event_id).await,
        Commands::Upgrade { tx_id } => cli::upgrade::upgrade(config, tx_id).await,
    };

    iconic::observability::shutdown_observability();

    result
}
