use serde::Serialize;

use crate::models::AdoptionStatus;

#[derive(Debug, Serialize)]
pub struct DogSummaryResponse {
    pub id: i32,
    pub name: String,
    pub breed: String,
}

#[derive(Debug, Serialize)]
pub struct DogDetailResponse {
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub description: String,
    pub gender: String,
    pub status: AdoptionStatus,
}
