use clap::{Parser, Subcommand};
use hoc_cors::config::Config;
use hoc_cors::cors;
use hoc_cors::error::AppResult;
use hoc_cors::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// hoc-cors - CORS policy for axum services
#[derive(Parser, Debug)]
#[command(name = "hoc-cors")]
#[command(version)]
#[command(about = "Serve with a resolved CORS policy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (overrides SERVER_HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the resolved CORS policy as JSON
    Policy,
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

    let config = Config::from_env()?;

    match cli.command {
        Commands::Server { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.server.addr();

            server::run_server(config, addr).await
        }
        Commands::Policy => {
            let policy = cors::resolve(&config.cors);
            println!("{}", serde_json::to_string_pretty(&policy)?);
            Ok(())
        }
    }
}
