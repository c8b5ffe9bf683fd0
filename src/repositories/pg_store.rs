use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::models::{Breed, DogDetail, DogSummary};
use crate::repositories::{breed, dog, PgPoolConn, ShelterStore, StoreError};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct PgShelterStore {
    pool: DbPool,
}

impl PgShelterStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PgPoolConn, StoreError> {
        Ok(self.pool.get()?)
    }
}

impl ShelterStore for PgShelterStore {
    fn list_dogs(&self) -> Result<Vec<DogSummary>, StoreError> {
        let mut conn = self.conn()?;
        Ok(dog::list_with_breed(&mut conn)?)
    }

    fn list_breeds(&self) -> Result<Vec<Breed>, StoreError> {
        let mut conn = self.conn()?;
        Ok(breed::list_all(&mut conn)?)
    }

    fn find_dog(&self, dog_id: i32) -> Result<Option<DogDetail>, StoreError> {
        let mut conn = self.conn()?;
        match dog::find_with_breed(&mut conn, dog_id)? {
            Some((row, breed_name)) => DogDetail::from_joined(row, breed_name)
                .map(Some)
                .map_err(|source| StoreError::InvalidStatus { dog_id, source }),
            None => Ok(None),
        }
    }
}
