//! Doctor repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::doctors_sea as doctors_adapter;
pub use crate::entities::doctors::DoctorStatus;
use crate::errors::domain::DomainError;

/// Doctor domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub specialty: String,
    pub status: DoctorStatus,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    doctor_id: i64,
) -> Result<Option<Doctor>, DomainError> {
    let doctor = doctors_adapter::find_by_id(conn, doctor_id).await?;
    Ok(doctor.map(Doctor::from))
}

pub async fn find_by_user_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<Doctor>, DomainError> {
    let doctor = doctors_adapter::find_by_user_id(conn, user_id).await?;
    Ok(doctor.map(Doctor::from))
}

pub async fn list_by_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    status: DoctorStatus,
) -> Result<Vec<Doctor>, DomainError> {
    let doctors = doctors_adapter::list_by_status(conn, status).await?;
    Ok(doctors.into_iter().map(Doctor::from).collect())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Doctor>, DomainError> {
    let doctors = doctors_adapter::list_all(conn).await?;
    Ok(doctors.into_iter().map(Doctor::from).collect())
}

pub async fn create_doctor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    full_name: &str,
    specialty: &str,
) -> Result<Doctor, DomainError> {
    let doctor = doctors_adapter::create_doctor(conn, user_id, full_name, specialty).await?;
    Ok(Doctor::from(doctor))
}

impl From<crate::entities::doctors::Model> for Doctor {
    fn from(model: crate::entities::doctors::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            full_name: model.full_name,
            specialty: model.specialty,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
