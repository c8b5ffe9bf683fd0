pub mod breed;
pub mod dog;
pub mod error;
