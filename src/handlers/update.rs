use crate::adapter;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::{JsonBody, UserIdPath};
use crate::intent;
use crate::models::UpdateUserRequest;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// PUT /users/:userId handler - Set name and email
///
/// Returns every attribute of the item after the write. Fields missing from
/// the body are stored as null, and an unknown userId gets a new item.
#[utoipa::path(
    put,
    path = routes::USER_ITEM,
    params(
        ("userId" = String, Path, description = "Key of the user record")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated item, all attributes", body = serde_json::Value),
        (status = 400, description = "Invalid JSON or undecodable userId", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let intent = intent::resolve_update(user_id, body);
    let operation = intent.operation();

    let attributes = adapter::execute(state.store.as_ref(), intent)
        .await
        .into_result(operation)?;

    Ok((StatusCode::OK, Json(attributes)))
}
