//! SeaORM adapter for the user repository.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::{user_credentials, users};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn find_user_by_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, DomainError> {
    users::Entity::find_by_id(user_id)
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_user_by_sub<C: ConnectionTrait>(
    conn: &C,
    sub: &str,
) -> Result<Option<users::Model>, DomainError> {
    users::Entity::find()
        .filter(users::Column::Sub.eq(sub))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_credentials_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<user_credentials::Model>, DomainError> {
    user_credentials::Entity::find()
        .filter(user_credentials::Column::Email.eq(email))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_admins<C: ConnectionTrait>(conn: &C) -> Result<Vec<users::Model>, DomainError> {
    users::Entity::find()
        .filter(users::Column::IsAdmin.eq(true))
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    sub: &str,
    full_name: &str,
    is_admin: bool,
) -> Result<users::Model, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        sub: Set(sub.to_string()),
        full_name: Set(full_name.to_string()),
        is_admin: Set(is_admin),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await.map_err(map_db_err)
}

pub async fn create_credentials<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    email: &str,
    password_hash: &str,
) -> Result<user_credentials::Model, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let credential_active = user_credentials::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
        last_login: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    credential_active.insert(conn).await.map_err(map_db_err)
}

pub async fn touch_last_login<C: ConnectionTrait>(
    conn: &C,
    credential: user_credentials::Model,
) -> Result<user_credentials::Model, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let mut credential_active: user_credentials::ActiveModel = credential.into();
    credential_active.last_login = Set(Some(now));
    credential_active.updated_at = Set(now);

    credential_active.update(conn).await.map_err(map_db_err)
}
