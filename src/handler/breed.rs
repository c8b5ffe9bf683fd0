use axum::{extract::State, Json};

use crate::api_models::breed::BreedResponse;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::Breed;

impl From<Breed> for BreedResponse {
    fn from(breed: Breed) -> Self {
        Self {
            id: breed.id,
            name: breed.name,
        }
    }
}

pub async fn list_breeds(
    State(state): State<AppState>,
) -> Result<Json<Vec<BreedResponse>>, AppError> {
    let items = state.store.list_breeds()?;
    let response: Vec<BreedResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(response))
}
