mod api_models;
mod app;
mod handler;
mod models;
mod repositories;
mod routes;
mod schema;
mod utils;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let server_cfg = utils::config::ServerConfig::from_env()?;
    let db_cfg = utils::config::DatabaseConfig::from_env()?;
    let app = app::build_app(&server_cfg, &db_cfg)?;

    let listener = tokio::net::TcpListener::bind(server_cfg.addr)
        .await
        .with_context(|| format!("bind failed on {}", server_cfg.addr))?;
    tracing::info!("Axum listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
