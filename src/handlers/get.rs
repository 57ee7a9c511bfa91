use crate::adapter;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::UserIdPath;
use crate::intent;
use crate::models::UserRecord;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /users/:userId handler - Retrieve a user
#[utoipa::path(
    get,
    path = routes::USER_ITEM,
    params(
        ("userId" = String, Path, description = "Key of the user record")
    ),
    responses(
        (status = 200, description = "User found", body = UserRecord),
        (status = 400, description = "Undecodable userId", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let intent = intent::resolve_get(user_id)?;
    let operation = intent.operation();

    let user = adapter::execute(state.store.as_ref(), intent)
        .await
        .into_result(operation)?;

    Ok((StatusCode::OK, Json(user)))
}
