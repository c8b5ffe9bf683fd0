//! In-memory `ShelterStore` for handler tests.

use crate::models::{Breed, Dog, DogDetail, DogSummary};
use crate::repositories::{ShelterStore, StoreError};

/// Keeps rows in insertion order. Dogs whose breed is missing are skipped,
/// the same as an inner join would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    breeds: Vec<Breed>,
    dogs: Vec<Dog>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breed(mut self, id: i32, name: &str) -> Self {
        self.breeds.push(Breed {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_dog(mut self, dog: Dog) -> Self {
        self.dogs.push(dog);
        self
    }

    fn breed_name(&self, breed_id: i32) -> Option<&str> {
        self.breeds
            .iter()
            .find(|b| b.id == breed_id)
            .map(|b| b.name.as_str())
    }
}

impl ShelterStore for InMemoryStore {
    fn list_dogs(&self) -> Result<Vec<DogSummary>, StoreError> {
        Ok(self
            .dogs
            .iter()
            .filter_map(|d| {
                self.breed_name(d.breed_id).map(|breed| DogSummary {
                    id: d.id,
                    name: d.name.clone(),
                    breed: breed.to_string(),
                })
            })
            .collect())
    }

    fn list_breeds(&self) -> Result<Vec<Breed>, StoreError> {
        Ok(self.breeds.clone())
    }

    fn find_dog(&self, dog_id: i32) -> Result<Option<DogDetail>, StoreError> {
        let Some(dog) = self.dogs.iter().find(|d| d.id == dog_id) else {
            return Ok(None);
        };
        let Some(breed) = self.breed_name(dog.breed_id) else {
            return Ok(None);
        };
        DogDetail::from_joined(dog.clone(), breed.to_string())
            .map(Some)
            .map_err(|source| StoreError::InvalidStatus { dog_id, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(id: i32, name: &str, breed_id: i32) -> Dog {
        Dog {
            id,
            name: name.to_string(),
            breed_id,
            age: 2,
            description: String::new(),
            gender: "Female".to_string(),
            status: "Available".to_string(),
        }
    }

    #[test]
    fn dogs_without_breed_are_not_joined() {
        let store = InMemoryStore::new()
            .with_breed(1, "Labrador")
            .with_dog(dog(1, "Buddy", 1))
            .with_dog(dog(2, "Ghost", 42));

        let dogs = store.list_dogs().unwrap();
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs[0].name, "Buddy");
        assert!(store.find_dog(2).unwrap().is_none());
    }

    #[test]
    fn bad_status_surfaces_as_error() {
        let mut bad = dog(3, "Rex", 1);
        bad.status = "Unknown".to_string();
        let store = InMemoryStore::new().with_breed(1, "Labrador").with_dog(bad);

        let err = store.find_dog(3).unwrap_err();
        assert!(matches!(err, StoreError::InvalidStatus { dog_id: 3, .. }));
    }
}
