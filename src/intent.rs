//! Request validation.
//!
//! Each `resolve_*` function turns the parts of one HTTP request into an
//! [`Intent`], the store-agnostic description of a single table operation.
//! Rejections happen here, before any store access.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::models::{CreateUserRequest, UpdateUserRequest, UserRecord};
use crate::store::UserChanges;

/// The four operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Message returned to the caller when the store fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Get => "Could not retrieve user",
            Operation::Create => "Could not create user",
            Operation::Update => "Could not update user",
            Operation::Delete => "Could not delete user",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Get { user_id: String },
    Put(UserRecord),
    Update { user_id: String, changes: UserChanges },
    Delete { user_id: String },
}

impl Intent {
    pub fn operation(&self) -> Operation {
        match self {
            Intent::Get { .. } => Operation::Get,
            Intent::Put(_) => Operation::Create,
            Intent::Update { .. } => Operation::Update,
            Intent::Delete { .. } => Operation::Delete,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Missing userId path parameter")]
    MissingUserId,
}

pub fn resolve_get(user_id: String) -> Result<Intent, ValidationError> {
    Ok(Intent::Get {
        user_id: require_path_id(user_id)?,
    })
}

/// All three fields must be present and truthy: `null`, `false`, `0` and
/// `""` count as missing. No other shape check is made.
pub fn resolve_create(body: CreateUserRequest) -> Result<Intent, ValidationError> {
    match (present(body.user_id), present(body.name), present(body.email)) {
        (Some(user_id), Some(name), Some(email)) => Ok(Intent::Put(UserRecord {
            user_id,
            name,
            email,
        })),
        _ => Err(ValidationError::MissingFields),
    }
}

/// Body fields pass through as given; an absent field is later written as null.
pub fn resolve_update(user_id: String, body: UpdateUserRequest) -> Intent {
    Intent::Update {
        user_id,
        changes: UserChanges {
            name: body.name,
            email: body.email,
        },
    }
}

pub fn resolve_delete(user_id: String) -> Result<Intent, ValidationError> {
    Ok(Intent::Delete {
        user_id: require_path_id(user_id)?,
    })
}

fn present(field: Option<JsonValue>) -> Option<JsonValue> {
    field.filter(is_truthy)
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

fn require_path_id(user_id: String) -> Result<String, ValidationError> {
    if user_id.is_empty() {
        Err(ValidationError::MissingUserId)
    } else {
        Ok(user_id)
    }
}
