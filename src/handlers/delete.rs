use crate::adapter;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::UserIdPath;
use crate::intent;
use crate::models::DeleteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// DELETE /users/:userId handler - Remove a user
///
/// Deleting a userId that does not exist still succeeds.
#[utoipa::path(
    delete,
    path = routes::USER_ITEM,
    params(
        ("userId" = String, Path, description = "Key of the user record")
    ),
    responses(
        (status = 200, description = "User removed", body = DeleteResponse),
        (status = 400, description = "Undecodable userId", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let intent = intent::resolve_delete(user_id)?;
    let operation = intent.operation();

    let ack = adapter::execute(state.store.as_ref(), intent)
        .await
        .into_result(operation)?;

    Ok((StatusCode::OK, Json(ack)))
}
