use axum::{
    extract::{Path, State},
    Json,
};

use crate::api_models::dog::{DogDetailResponse, DogSummaryResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::{DogDetail, DogSummary};

impl From<DogSummary> for DogSummaryResponse {
    fn from(dog: DogSummary) -> Self {
        Self {
            id: dog.id,
            name: dog.name,
            breed: dog.breed,
        }
    }
}

impl From<DogDetail> for DogDetailResponse {
    fn from(dog: DogDetail) -> Self {
        Self {
            id: dog.id,
            name: dog.name,
            breed: dog.breed,
            age: dog.age,
            description: dog.description,
            gender: dog.gender,
            status: dog.status,
        }
    }
}

pub async fn list_dogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<DogSummaryResponse>>, AppError> {
    let items = state.store.list_dogs()?;
    let response: Vec<DogSummaryResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DogDetailResponse>, AppError> {
    let found = state.store.find_dog(id)?.ok_or(AppError::DogNotFound)?;
    Ok(Json(found.into()))
}
