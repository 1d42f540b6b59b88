//! Notification repository functions for domain layer (generic over ConnectionTrait).
//!
//! The inbox is an explicit typed collection with three capabilities:
//! enqueue, mark-all-read, clear.

use sea_orm::ConnectionTrait;

use crate::adapters::notifications_sea as notifications_adapter;
use crate::errors::domain::DomainError;

/// Notification domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: time::OffsetDateTime,
}

pub async fn enqueue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    kind: &str,
    message: &str,
) -> Result<Notification, DomainError> {
    let notification = notifications_adapter::enqueue(conn, user_id, kind, message).await?;
    Ok(Notification::from(notification))
}

pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Notification>, DomainError> {
    let notifications = notifications_adapter::list_for_user(conn, user_id).await?;
    Ok(notifications.into_iter().map(Notification::from).collect())
}

pub async fn mark_all_read<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, DomainError> {
    notifications_adapter::mark_all_read(conn, user_id).await
}

pub async fn clear_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, DomainError> {
    notifications_adapter::clear_for_user(conn, user_id).await
}

impl From<crate::entities::notifications::Model> for Notification {
    fn from(model: crate::entities::notifications::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            kind: model.kind,
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
