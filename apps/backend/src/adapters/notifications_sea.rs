//! SeaORM adapter for the notification inbox.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::notifications;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn enqueue<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    kind: &str,
    message: &str,
) -> Result<notifications::Model, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let notification_active = notifications::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        kind: Set(kind.to_string()),
        message: Set(message.to_string()),
        is_read: Set(false),
        created_at: Set(now),
    };

    notification_active.insert(conn).await.map_err(map_db_err)
}

pub async fn list_for_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<notifications::Model>, DomainError> {
    notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .order_by_desc(notifications::Column::CreatedAt)
        .all(conn)
        .await
        .map_err(map_db_err)
}

/// Mark every unread notification for this user as read.
/// Returns the number of rows affected.
pub async fn mark_all_read<C: ConnectionTrait>(conn: &C, user_id: i64) -> Result<u64, DomainError> {
    let result = notifications::Entity::update_many()
        .col_expr(notifications::Column::IsRead, sea_orm::sea_query::Expr::value(true))
        .filter(notifications::Column::UserId.eq(user_id))
        .filter(notifications::Column::IsRead.eq(false))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    Ok(result.rows_affected)
}

/// Delete every notification for this user. Returns the number of rows deleted.
pub async fn clear_for_user<C: ConnectionTrait>(conn: &C, user_id: i64) -> Result<u64, DomainError> {
    let result = notifications::Entity::delete_many()
        .filter(notifications::Column::UserId.eq(user_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    Ok(result.rows_affected)
}
