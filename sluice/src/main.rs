use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::{error::Result, push::PushArgs, serve::ServeArgs};

mod error;
mod observability;
mod push;
mod serve;

#[derive(Parser)]
#[command(name = "sluice")]
#[command(about = "Sluice CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the ingest server with the built-in processor
    Serve {
        #[clap(flatten)]
        inner: ServeArgs,
    },
    /// Push item payloads to a running server
    Push {
        #[clap(flatten)]
        inner: PushArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init_observability(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let ct = CancellationToken::new();

    let ct_clone = ct.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        ct_clone.cancel();
    });

    match cli.command {
        Commands::Serve { inner } => inner.run(ct).await,
        Commands::Push { inner } => inner.run(ct).await,
    }
}
