use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::breed::list_breeds;

pub fn router() -> Router<AppState> {
    Router::new().route("/breeds", get(list_breeds))
}
