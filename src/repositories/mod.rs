//! Data access for the shelter tables.
//!
//! `dog` and `breed` hold the diesel queries; `ShelterStore` is what the
//! handlers see, so tests can swap Postgres for an in-memory store.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use thiserror::Error;

use crate::models::{Breed, DogDetail, DogSummary};

pub mod breed;
pub mod dog;
#[cfg(test)]
pub mod in_memory;
pub mod pg_store;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("query error: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("invalid adoption status for dog {dog_id}: {source}")]
    InvalidStatus {
        dog_id: i32,
        #[source]
        source: strum::ParseError,
    },
}

pub trait ShelterStore: Send + Sync {
    /// Every dog joined with its breed name, ordered by dog id.
    fn list_dogs(&self) -> Result<Vec<DogSummary>, StoreError>;

    fn list_breeds(&self) -> Result<Vec<Breed>, StoreError>;

    /// `Ok(None)` when no dog (with a resolvable breed) has this id.
    fn find_dog(&self, dog_id: i32) -> Result<Option<DogDetail>, StoreError>;
}
