//! SeaORM adapter for the doctor repository.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::doctors::{self, DoctorStatus};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    doctor_id: i64,
) -> Result<Option<doctors::Model>, DomainError> {
    doctors::Entity::find_by_id(doctor_id)
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_by_user_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Option<doctors::Model>, DomainError> {
    doctors::Entity::find()
        .filter(doctors::Column::UserId.eq(user_id))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn list_by_status<C: ConnectionTrait>(
    conn: &C,
    status: DoctorStatus,
) -> Result<Vec<doctors::Model>, DomainError> {
    doctors::Entity::find()
        .filter(doctors::Column::Status.eq(status))
        .order_by_asc(doctors::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<doctors::Model>, DomainError> {
    doctors::Entity::find()
        .order_by_asc(doctors::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn create_doctor<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    full_name: &str,
    specialty: &str,
) -> Result<doctors::Model, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let doctor_active = doctors::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        full_name: Set(full_name.to_string()),
        specialty: Set(specialty.to_string()),
        status: Set(DoctorStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
    };

    doctor_active.insert(conn).await.map_err(map_db_err)
}
