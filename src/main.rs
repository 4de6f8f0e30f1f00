#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::StartupError;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let app = routes::app()?;

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await.map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
