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

use super::dto::UserRequest;
use super::repo_types::User;
use super::services;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/name/:name", get(users_by_name))
        .route("/users/email/:email", get(users_by_email))
        .route("/users/with-pending-orders", get(users_with_pending_orders))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses((status = 200, description = "Every user", body = [User], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> AppResult<Hal<CollectionModel<User>>> {
    let users = services::list_users(&state).await?;
    Ok(Hal(state.links().collection(users, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User, content_type = "application/hal+json"),
        (status = 404, description = "No such user")
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Hal<EntityModel<User>>> {
    let user = services::get_user(&state, id).await?;
    Ok(Hal(state.links().entity(user)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserRequest,
    responses((status = 201, description = "User created", body = User, content_type = "application/hal+json"))
)]
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> AppResult<impl IntoResponse> {
    let user = services::create_user(&state, payload).await?;
    let links = state.links();
    let location = links.link(&LinkBuilder::item_path::<User>(user.id)).href;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Hal(links.entity(user)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = User, content_type = "application/hal+json"),
        (status = 404, description = "No such user")
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserRequest>,
) -> AppResult<Hal<EntityModel<User>>> {
    let user = services::update_user(&state, id, payload).await?;
    Ok(Hal(state.links().entity(user)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No such user"),
        (status = 409, description = "User still has orders or notifications")
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    services::delete_user(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/users/name/{name}",
    tag = "users",
    params(("name" = String, Path, description = "Case-insensitive fragment of the name")),
    responses((status = 200, description = "Matching users", body = [User], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn users_by_name(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(name): Path<String>,
) -> AppResult<Hal<CollectionModel<User>>> {
    let users = services::search_by_name(&state, &name).await?;
    Ok(Hal(state.links().collection(users, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = "users",
    params(("email" = String, Path, description = "Case-insensitive fragment of the email")),
    responses((status = 200, description = "Matching users", body = [User], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn users_by_email(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(email): Path<String>,
) -> AppResult<Hal<CollectionModel<User>>> {
    let users = services::search_by_email(&state, &email).await?;
    Ok(Hal(state.links().collection(users, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/users/with-pending-orders",
    tag = "users",
    responses((status = 200, description = "Users with at least one pending order", body = [User], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn users_with_pending_orders(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> AppResult<Hal<CollectionModel<User>>> {
    let users = services::users_with_pending_orders(&state).await?;
    Ok(Hal(state.links().collection(users, &uri)))
}
