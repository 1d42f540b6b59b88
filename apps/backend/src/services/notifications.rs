//! Notification inbox: list-and-mark-read, clear.

use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::error::AppError;
use crate::repos::notifications::{self, Notification};

/// Fetch the user's inbox and mark everything read in the same pass
/// (the read state flips on fetch, so a second call reports all read).
pub async fn drain_inbox(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<Notification>, AppError> {
    let marked = notifications::mark_all_read(db, user_id).await?;
    let inbox = notifications::list_for_user(db, user_id).await?;

    debug!(user_id, marked, total = inbox.len(), "Inbox drained");

    Ok(inbox)
}

/// Delete every notification for the user. Returns the number removed.
pub async fn clear_inbox(db: &DatabaseConnection, user_id: i64) -> Result<u64, AppError> {
    let removed = notifications::clear_for_user(db, user_id).await?;

    debug!(user_id, removed, "Inbox cleared");

    Ok(removed)
}
