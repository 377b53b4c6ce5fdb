use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// Landing site of the Programa de Adesão de Angola (SADC FTA & AfCFTA)
#[derive(Parser)]
#[command(name = "adesao")]
#[command(about = "Serve the Programa de Adesão landing page", long_about = None)]
struct Args {
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
    let args = Args::parse();

    let config = adesao::Config::load(args.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    adesao::observability::init_observability(
        "adesao",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match args.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
    }
}
