use clap::Parser;
use pokeverse::config::Config;
use pokeverse::error::AppResult;
use pokeverse::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// pokeverse - a localized Pokemon lookup service
#[derive(Parser, Debug)]
#[command(name = "pokeverse")]
#[command(version = "1.0.0")]
#[command(about = "A localized Pokemon lookup web service", long_about = None)]
struct Cli {
    /// Host to bind to (overrides SERVER_HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides SERVER_PORT env var)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    // Load configuration; any startup error aborts the process with a
    // non-zero exit code.
    let config = Config::from_env()?;

    // Override config with CLI args if provided
    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    server::run_server(config, addr).await
}
