use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppResult,
    hal::{CollectionModel, EntityModel, Hal, LinkBuilder},
    state::AppState,
};

use super::dto::NotificationRequest;
use super::repo_types::Notification;
use super::services;

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(list_notifications).post(create_notification),
        )
        .route(
            "/notifications/:id",
            get(get_notification)
                .put(update_notification)
                .delete(delete_notification),
        )
        .route("/notifications/user/:user_id", get(notifications_by_user))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "notifications",
    responses((status = 200, description = "Every notification", body = [Notification], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn list_notifications(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> AppResult<Hal<CollectionModel<Notification>>> {
    let notifications = services::list_notifications(&state).await?;
    Ok(Hal(state.links().collection(notifications, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    tag = "notifications",
    params(("id" = i64, Path, description = "Notification id")),
    responses(
        (status = 200, description = "The notification", body = Notification, content_type = "application/hal+json"),
        (status = 404, description = "No such notification")
    )
)]
#[instrument(skip(state))]
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Hal<EntityModel<Notification>>> {
    let notification = services::get_notification(&state, id).await?;
    Ok(Hal(state.links().entity(notification)))
}

#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = "notifications",
    request_body = NotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification, content_type = "application/hal+json"),
        (status = 400, description = "The referenced user does not exist")
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<NotificationRequest>,
) -> AppResult<impl IntoResponse> {
    let notification = services::create_notification(&state, payload).await?;
    let links = state.links();
    let location = links
        .link(&LinkBuilder::item_path::<Notification>(notification.id))
        .href;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Hal(links.entity(notification)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}",
    tag = "notifications",
    params(("id" = i64, Path, description = "Notification id")),
    request_body = NotificationRequest,
    responses(
        (status = 200, description = "Notification updated", body = Notification, content_type = "application/hal+json"),
        (status = 400, description = "The referenced user does not exist"),
        (status = 404, description = "No such notification")
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NotificationRequest>,
) -> AppResult<Hal<EntityModel<Notification>>> {
    let notification = services::update_notification(&state, id, payload).await?;
    Ok(Hal(state.links().entity(notification)))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = "notifications",
    params(("id" = i64, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "No such notification")
    )
)]
#[instrument(skip(state))]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    services::delete_notification(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/notifications/user/{user_id}",
    tag = "notifications",
    params(("user_id" = i64, Path, description = "Recipient user id")),
    responses(
        (status = 200, description = "Notifications sent to the user", body = [Notification], content_type = "application/hal+json"),
        (status = 404, description = "No such user")
    )
)]
#[instrument(skip(state))]
pub async fn notifications_by_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<i64>,
) -> AppResult<Hal<CollectionModel<Notification>>> {
    let notifications = services::notifications_by_user(&state, user_id).await?;
    Ok(Hal(state.links().collection(notifications, &uri)))
}
