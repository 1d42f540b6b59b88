//! Repository functions for the domain layer (generic over `ConnectionTrait`).
//!
//! Repos expose domain models and delegate persistence to the SeaORM
//! adapters; services never see entity types.

pub mod appointments;
pub mod doctors;
pub mod notifications;
pub mod users;
