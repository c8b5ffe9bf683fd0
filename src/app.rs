use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::repositories::pg_store::{DbPool, PgShelterStore};
use crate::repositories::ShelterStore;
use crate::routes;
use crate::utils::config::{DatabaseConfig, ServerConfig};
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ShelterStore>,
}

pub fn build_pool(db: &DatabaseConfig) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(db.url.as_str());
    Pool::builder()
        .max_size(db.pool_max_size)
        .build(manager)
        .context("failed to create DB pool")
}

pub fn build_app(server: &ServerConfig, db: &DatabaseConfig) -> anyhow::Result<Router> {
    let pool = build_pool(db)?;
    let store = Arc::new(PgShelterStore::new(pool));
    Ok(build_app_with_store(store, &server.allowed_origins))
}

pub fn build_app_with_store(store: Arc<dyn ShelterStore>, allowed_origins: &[String]) -> Router {
    let state = AppState { store };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer(allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
