use clap::Parser;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "credkit")]
#[command(about = "Resolve request credentials from explicit values or discovery", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    credkit_utils::tracing::init()
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))?;

    cli.command.execute().await
}
