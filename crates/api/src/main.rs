//! Person API - HTTP server for the person and location schemas.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use person_api_lib::config::{ApiConfig, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "person-api")]
#[command(author, version, about = "Validated person and location API", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short = 'H', long, default_value = DEFAULT_HOST, env = "API_HOST")]
        host: String,
        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "API_PORT")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables before clap reads its env fallbacks
    let config = ApiConfig::from_env();

    let cli = Cli::parse();
    init_tracing(cli.verbose, &config.service.log_level);

    match cli.command {
        Commands::Serve { host, port } => {
            let config = config.with_addr(host, port);
            tracing::debug!(?config, "Configuration loaded");
            person_api_lib::run_server(config).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
///
/// `RUST_LOG` wins when set, otherwise the configured default applies.
/// `--verbose` forces debug output regardless.
fn init_tracing(verbose: bool, default_filter: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
