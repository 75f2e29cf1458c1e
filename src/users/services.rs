use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::orders::repo_types::PENDING;
use crate::state::AppState;
use crate::users::dto::UserRequest;
use crate::users::repo_types::User;

pub async fn list_users(st: &AppState) -> AppResult<Vec<User>> {
    Ok(st.users.list().await?)
}

pub async fn get_user(st: &AppState, id: i64) -> AppResult<User> {
    st.users
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))
}

/// Fails with 404 unless the user exists; used by the per-user listings.
pub async fn ensure_user(st: &AppState, id: i64) -> AppResult<()> {
    get_user(st, id).await.map(|_| ())
}

pub async fn create_user(st: &AppState, req: UserRequest) -> AppResult<User> {
    let user = st.users.insert(&req).await?;
    info!(user_id = user.id, "user created");
    Ok(user)
}

pub async fn update_user(st: &AppState, id: i64, req: UserRequest) -> AppResult<User> {
    let user = st
        .users
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))?;
    info!(user_id = id, "user updated");
    Ok(user)
}

pub async fn delete_user(st: &AppState, id: i64) -> AppResult<()> {
    match st.users.delete(id).await {
        Ok(true) => {
            info!(user_id = id, "user deleted");
            Ok(())
        }
        Ok(false) => Err(AppError::not_found("user", id)),
        Err(e) => {
            warn!(user_id = id, error = %e, "user delete refused");
            Err(e.into())
        }
    }
}

pub async fn search_by_name(st: &AppState, fragment: &str) -> AppResult<Vec<User>> {
    Ok(st.users.search_by_name(fragment).await?)
}

pub async fn search_by_email(st: &AppState, fragment: &str) -> AppResult<Vec<User>> {
    Ok(st.users.search_by_email(fragment).await?)
}

pub async fn users_with_pending_orders(st: &AppState) -> AppResult<Vec<User>> {
    Ok(st.users.with_orders_in_status(PENDING).await?)
}
