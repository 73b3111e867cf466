use crate::{
    api::models::*,
    constants::{NO_MATCHES_MESSAGE, SEARCH_MESSAGE_HEADER, USER_CREATED_MESSAGE, USER_DELETED_MESSAGE},
    core::{
        models::{
            audit::AppLog,
            user::{UserId, UserSummary},
        },
        search::SearchOutcome,
        services::DirectoryService,
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::Storage},
};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};

use std::sync::Arc;

pub type SharedService<S> = Arc<DirectoryService<InMemoryLogging, S>>;

// Define API routes
pub fn api_routes<S: Storage + 'static>(service: SharedService<S>) -> Router {
    Router::new()
        .route("/users", get(list_users::<S>).post(create_user::<S>))
        .route("/users/search", get(search_users::<S>))
        .route("/users/{user_id}", delete(delete_user::<S>))
        .route("/logs", get(get_app_logs::<S>))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = CreateUserResponse),
        (status = 400, description = "Malformed body or a required field is missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user<S: Storage>(
    State(service): State<SharedService<S>>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let user = service.create_user(req.name, req.email, req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: USER_CREATED_MESSAGE.to_string(),
            user: user.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users<S: Storage>(State(service): State<SharedService<S>>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(
        ("user_id" = u64, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 400, description = "User id is not a number", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_user<S: Storage>(
    State(service): State<SharedService<S>>,
    AppPath(user_id): AppPath<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete_user(user_id).await?;
    Ok(Json(MessageResponse {
        message: USER_DELETED_MESSAGE.to_string(),
    }))
}

/// Substring search over names and emails.
///
/// An empty result carries an `x-search-message` header so callers can tell
/// "nothing matched" apart from a rejected query.
#[utoipa::path(
    get,
    path = "/users/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching users, possibly none", body = [UserSummary]),
        (status = 400, description = "Query missing, empty or symbols only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn search_users<S: Storage>(
    State(service): State<SharedService<S>>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Response, ApiError> {
    let response = match service.search_users(params.query.as_deref()).await? {
        SearchOutcome::Matches(results) => Json(results).into_response(),
        SearchOutcome::NoMatches => (
            [(SEARCH_MESSAGE_HEADER, NO_MATCHES_MESSAGE)],
            Json(Vec::<UserSummary>::new()),
        )
            .into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/logs",
    responses(
        (status = 200, description = "Activity log", body = [AppLog]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_app_logs<S: Storage>(State(service): State<SharedService<S>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
