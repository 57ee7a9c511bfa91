use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{CreateUserRequest, DeleteResponse, UpdateUserRequest, UserRecord};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "users-dynamodb-api",
        version = "1.0.0",
        description = "CRUD endpoints for user records stored in a DynamoDB table"
    ),
    paths(
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            UserRecord,
            CreateUserRequest,
            UpdateUserRequest,
            DeleteResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "users", description = "User record operations")
    )
)]
pub struct ApiDoc;
