use crate::adapter;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::JsonBody;
use crate::intent;
use crate::models::{CreateUserRequest, UserRecord};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /users handler - Create or overwrite a user
///
/// The write is an unconditional upsert: an existing record with the same
/// userId is replaced.
#[utoipa::path(
    post,
    path = routes::USERS,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User stored", body = UserRecord),
        (status = 400, description = "Missing required fields or invalid JSON", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let intent = intent::resolve_create(body)?;
    let operation = intent.operation();

    let user = adapter::execute(state.store.as_ref(), intent)
        .await
        .into_result(operation)?;

    Ok((StatusCode::OK, Json(user)))
}
