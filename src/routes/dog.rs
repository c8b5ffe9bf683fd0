use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::dog::{get_dog, list_dogs};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(list_dogs))
        .route("/dogs/:id", get(get_dog))
}
