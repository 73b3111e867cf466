use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::DirectoryError;
use crate::core::models::user::{User, UserId};

// Fields are optional so a missing one surfaces as our 400, not a body rejection.
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Text to look for in user names and emails
    pub query: Option<String>,
}

/// A user as returned by the API. The stored password is never echoed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Extractors whose rejections go through ApiError, so a bad body, path or
// query string still gets a JSON error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

// Newtype wrapper for DirectoryError to implement IntoResponse
pub struct ApiError(pub DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DirectoryError::MalformedRequest(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(DirectoryError::MalformedRequest(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(DirectoryError::MalformedRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if self.0.is_internal() {
            error!("Request failed: {}", self.0);
        }
        let (status, error_message) = match self.0 {
            DirectoryError::InvalidInput(_, detail) => (StatusCode::BAD_REQUEST, detail.description),
            DirectoryError::MalformedRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            err @ (DirectoryError::EmptyQuery | DirectoryError::SymbolOnlyQuery) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            DirectoryError::UserNotFound(id) => (StatusCode::NOT_FOUND, format!("User {} not found", id)),
            DirectoryError::StorageError(_) | DirectoryError::LoggingError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
