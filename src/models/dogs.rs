use diesel::prelude::*;
use serde::Serialize;
use strum::{Display, EnumString};

use crate::schema::dogs;

/// Adoption status, persisted in `dogs.status` as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum AdoptionStatus {
    Available,
    Adopted,
    Pending,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = dogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Dog {
    pub id: i32,
    pub name: String,
    pub breed_id: i32,
    pub age: i32,
    pub description: String,
    pub gender: String,
    pub status: String,
}

/// Row of `dogs JOIN breeds` projected to (dogs.id, dogs.name, breeds.name).
#[derive(Queryable, Debug, Clone, PartialEq, Eq)]
pub struct DogSummary {
    pub id: i32,
    pub name: String,
    pub breed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogDetail {
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub description: String,
    pub gender: String,
    pub status: AdoptionStatus,
}

impl DogDetail {
    /// Combines a dog row with the name of its joined breed.
    pub fn from_joined(dog: Dog, breed: String) -> Result<Self, strum::ParseError> {
        let status = dog.status.parse::<AdoptionStatus>()?;
        Ok(Self {
            id: dog.id,
            name: dog.name,
            breed,
            age: dog.age,
            description: dog.description,
            gender: dog.gender,
            status,
        })
    }
}
