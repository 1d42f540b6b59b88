//! SeaORM adapters: the only layer that touches entity types directly.
//!
//! Functions are generic over `ConnectionTrait` so they run against either
//! the pooled connection or an open transaction. All `DbErr` values are
//! translated through `infra::db_errors::map_db_err`.

pub mod appointments_sea;
pub mod doctors_sea;
pub mod notifications_sea;
pub mod users_sea;
