use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BreedResponse {
    pub id: i32,
    pub name: String,
}
