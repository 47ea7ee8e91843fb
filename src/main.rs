use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

pub mod advisor;
pub mod config;
pub mod handler;
pub mod models;

use config::AppConfig;
use handler::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // One discovery pass; every request afterwards uses this model.
    let model = advisor::select_best_model(&config.api_key).await;
    let gemini = advisor::GeminiClient::new(&config.api_key, &model);
    tracing::info!(model = %gemini.model(), "Target model locked for this process");

    let state = AppState { gemini };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "grades-backend listening");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
