//! SeaORM adapter for the appointment repository.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::appointments::{self, AppointmentStatus};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn create_appointment<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    doctor_id: i64,
    date: &str,
) -> Result<appointments::Model, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let appointment_active = appointments::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        doctor_id: Set(doctor_id),
        date: Set(date.to_string()),
        status: Set(AppointmentStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
    };

    appointment_active.insert(conn).await.map_err(map_db_err)
}

pub async fn list_for_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<appointments::Model>, DomainError> {
    appointments::Entity::find()
        .filter(appointments::Column::UserId.eq(user_id))
        .order_by_desc(appointments::Column::CreatedAt)
        .all(conn)
        .await
        .map_err(map_db_err)
}
