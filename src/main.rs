use anyhow::Result;
use clap::{Parser, Subcommand};

/// Moskill Netting Solutions website
#[derive(Parser)]
#[command(name = "moskill")]
#[command(about = "Marketing site and lead capture for Moskill Netting Solutions", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = moskill::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    moskill::observability::init_observability(
        "moskill",
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => moskill::cli::serve(config, host, port).await,
    }
}
