use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, CreateUserResponse, ErrorResponse, MessageResponse, UserResponse},
    core::models::{audit::AppLog, user::UserSummary},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::list_users,
        super::handlers::delete_user,
        super::handlers::search_users,
        super::handlers::get_app_logs
    ),
    components(schemas(
        CreateUserRequest,
        CreateUserResponse,
        MessageResponse,
        ErrorResponse,
        UserResponse,
        UserSummary,
        AppLog
    )),
    info(
        title = "userdir API",
        description = "API for creating, listing, deleting and searching directory users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
