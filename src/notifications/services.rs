use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::notifications::dto::NotificationRequest;
use crate::notifications::repo_types::Notification;
use crate::state::AppState;
use crate::users::services::ensure_user;

pub async fn list_notifications(st: &AppState) -> AppResult<Vec<Notification>> {
    Ok(st.notifications.list().await?)
}

pub async fn get_notification(st: &AppState, id: i64) -> AppResult<Notification> {
    st.notifications
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("notification", id))
}

pub async fn create_notification(
    st: &AppState,
    req: NotificationRequest,
) -> AppResult<Notification> {
    let notification = st.notifications.insert(&req).await.map_err(|e| {
        warn!(user_id = req.user_id, error = %e, "notification rejected");
        e
    })?;
    info!(
        notification_id = notification.id,
        user_id = notification.user_id,
        kind = %notification.kind,
        "notification created"
    );
    Ok(notification)
}

pub async fn update_notification(
    st: &AppState,
    id: i64,
    req: NotificationRequest,
) -> AppResult<Notification> {
    let notification = st
        .notifications
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("notification", id))?;
    info!(notification_id = id, "notification updated");
    Ok(notification)
}

pub async fn delete_notification(st: &AppState, id: i64) -> AppResult<()> {
    if !st.notifications.delete(id).await? {
        return Err(AppError::not_found("notification", id));
    }
    info!(notification_id = id, "notification deleted");
    Ok(())
}

pub async fn notifications_by_user(st: &AppState, user_id: i64) -> AppResult<Vec<Notification>> {
    ensure_user(st, user_id).await?;
    Ok(st.notifications.by_user(user_id).await?)
}
