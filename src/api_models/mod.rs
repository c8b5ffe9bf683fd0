pub mod breed;
pub mod dog;
