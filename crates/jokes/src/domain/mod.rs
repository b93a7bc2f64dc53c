//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (JokeInput, Joke)
//! - Domain value objects (JokeType, Rating, SortOption)
//! - Domain services (filter / sort engine)
//! - Repository and source traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
