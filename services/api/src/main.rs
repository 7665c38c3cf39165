use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use text_modify::{GeminiClient, GeminiConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

#[derive(Parser, Debug)]
#[command(name = "wordwise-api", about = "HTTP API for text statistics and rewrites")]
struct Config {
    /// Address to listen on
    #[arg(long, env = "WORDWISE_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let client = GeminiClient::new(GeminiConfig::from_env()).context("failed to build HTTP client")?;
    if client.config().api_key.is_none() {
        tracing::warn!("no API key configured; /modify, /summarize and /check will fail");
    }
    let app = routes::router(routes::AppState::new(Box::new(client)));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("listening on http://{}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
