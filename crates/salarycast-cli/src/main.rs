//! Salarycast CLI - salary prediction and market analysis.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use salarycast_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("salarycast_cli=info".parse()?)
                .add_directive("salarycast_core=info".parse()?)
                .add_directive("salarycast_data=info".parse()?)
                .add_directive("salarycast_serving=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(cmd) => cmd.run().await?,
        Commands::Analyze(cmd) => cmd.run().await?,
        Commands::Inspect(cmd) => cmd.run().await?,
    }

    Ok(())
}
