//! Weatherdeck
//!
//! Command-line entry point:
//! - `serve`: run the HTML server
//! - `render`: print one view to stdout
//! - `config`: emit the default configuration
//!
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use weatherdeck::api::{serve, AppState};
use weatherdeck::clock::SystemClock;
use weatherdeck::config::{generate_default_config, Config};
use weatherdeck::logging;
use weatherdeck::router::Route;
use weatherdeck::views::{render_settled, ViewContext};
use weatherdeck::weather::OpenMeteoClient;

#[derive(Parser)]
#[command(name = "weatherdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Welcome, health and current-weather views backed by Open-Meteo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render the view for a path and print it
    Render {
        /// Route path, e.g. /weather
        #[arg(default_value = "/")]
        path: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = logging::with_bootstrap(|| match &cli.config {
        Some(path) => Config::load_with_env(path),
        None => Ok(Config::load_default()),
    })?;

    logging::init(&config.logging);

    match cli.command {
        Commands::Serve { host, port } => {
            let mut api_config = config.api.clone();
            if let Some(host) = host {
                api_config.host = host;
            }
            if let Some(port) = port {
                api_config.port = port;
            }

            tracing::info!("Starting Weatherdeck v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Weather source: {}", config.weather.base_url);

            let client = OpenMeteoClient::new(config.weather.clone())
                .context("Failed to create weather client")?;
            let state = AppState::new(Arc::new(client), api_config.clone());

            serve(state, &api_config).await?;
        }

        Commands::Render { path } => {
            let route = Route::resolve(&path);
            tracing::debug!(%route, "Rendering view for {}", path);

            let client = OpenMeteoClient::new(config.weather.clone())
                .context("Failed to create weather client")?;
            let ctx = ViewContext::new(Arc::new(client), Arc::new(SystemClock));

            let page = render_settled(route, &ctx).await;
            println!("{}", page);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    eprintln!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
