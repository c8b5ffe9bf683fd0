pub mod breeds;
pub mod dogs;

pub use breeds::Breed;
pub use dogs::{AdoptionStatus, Dog, DogDetail, DogSummary};
