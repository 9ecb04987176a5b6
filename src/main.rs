#![recursion_limit = "256"]

mod config;
mod error;
mod logging;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    logging::init();
    if let Some(e) = config::dotenv_failure(dotenv) {
        tracing::warn!(error = %e, ".env could not be loaded");
    }

    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "profile-space listening");
    axum::serve(listener, app).await?;
    Ok(())
}
