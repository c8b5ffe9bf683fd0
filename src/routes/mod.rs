use axum::Router;

use crate::app::AppState;

mod breed;
mod dog;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // root and health check
        .merge(root::router())
        .nest("/api", dog::router().merge(breed::router()))
}
