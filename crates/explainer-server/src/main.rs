//! SARS letter explanation service executable

mod http_service;

use anyhow::Context;
use clap::{Arg, Command};
use explainer_core::{
    CompletionClient, DocumentClient, DocumentFetcher, ExplainerConfig, LetterAnalyzer,
    OpenAIClient,
};
use http_service::{create_app, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("explainer-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("SARS letter explanation service")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file path (falls back to environment variables)"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("ADDR")
                .help("Address to bind (overrides configuration)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Port to listen on (overrides configuration)"),
        )
        .get_matches();

    // Load configuration
    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = ExplainerConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path))?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => {
            let config = ExplainerConfig::from_env()
                .context("Failed to load configuration from environment")?;
            log::info!("Loaded configuration from environment");
            config
        }
    };

    let host = matches
        .get_one::<String>("host")
        .cloned()
        .unwrap_or_else(|| config.server.host.clone());
    let port = match matches.get_one::<String>("port") {
        Some(value) => value
            .parse::<u16>()
            .with_context(|| format!("Invalid port number: {}", value))?,
        None => config.server.port,
    };

    // Initialize the injected clients and the analysis pipeline
    let fetcher: Arc<dyn DocumentFetcher> =
        Arc::new(DocumentClient::new(config.fetch.clone()));
    let completion_client: Arc<dyn CompletionClient> =
        Arc::new(OpenAIClient::new(config.openai.clone()));
    let analyzer = Arc::new(LetterAnalyzer::new(fetcher, completion_client));

    log::info!(
        "✅ Initialized clients (model '{}', fetch timeout {}s)",
        config.openai.model,
        config.fetch.timeout_secs
    );

    let app = create_app(AppState { analyzer });

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    log::info!("Letter explainer listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
