use anyhow::Result;
use clap::{Parser, Subcommand};

/// tasky - marketing site for the Tasky productivity app
#[derive(Parser)]
#[command(name = "tasky")]
#[command(about = "Tasky landing page, legal pages and contact forms", long_about = None)]
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
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tasky::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    tasky::observability::init_observability(
        "tasky",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => tasky::cli::serve(config, host, port).await,
        Commands::Migrate => tasky::cli::migrate(config).await,
        Commands::Reset => tasky::cli::reset(config).await,
    }
}
