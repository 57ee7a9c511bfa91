use serde::{Deserialize, Serialize};

/// A user as written by the create operation
///
/// Values are stored as sent. Only their presence is checked, so a field
/// may hold any JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserRecord {
    #[serde(rename = "userId")]
    pub user_id: serde_json::Value,
    pub name: serde_json::Value,
    pub email: serde_json::Value,
}

/// Request body for POST /users
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<serde_json::Value>,
    pub name: Option<serde_json::Value>,
    pub email: Option<serde_json::Value>,
}

/// Request body for PUT /users/{userId}
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<serde_json::Value>,
    pub email: Option<serde_json::Value>,
}

/// Response type for successful DELETE operations
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}
