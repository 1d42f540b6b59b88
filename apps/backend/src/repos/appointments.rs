//! Appointment repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::appointments_sea as appointments_adapter;
pub use crate::entities::appointments::AppointmentStatus;
use crate::errors::domain::DomainError;

/// Appointment domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub status: AppointmentStatus,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn create_appointment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    doctor_id: i64,
    date: &str,
) -> Result<Appointment, DomainError> {
    let appointment =
        appointments_adapter::create_appointment(conn, user_id, doctor_id, date).await?;
    Ok(Appointment::from(appointment))
}

pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Appointment>, DomainError> {
    let appointments = appointments_adapter::list_for_user(conn, user_id).await?;
    Ok(appointments.into_iter().map(Appointment::from).collect())
}

impl From<crate::entities::appointments::Model> for Appointment {
    fn from(model: crate::entities::appointments::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            doctor_id: model.doctor_id,
            date: model.date,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
