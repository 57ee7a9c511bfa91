//! Store adapter.
//!
//! Runs exactly one store operation per [`Intent`] and folds the result
//! into an [`Outcome`]. Store failures are logged here, once, and never
//! travel further than the `StoreError` variant.

use std::fmt::Display;

use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::intent::{Intent, Operation};
use crate::models::{DeleteResponse, UserRecord};
use crate::store::{Document, StoreError, UserChanges, UserStore, KEY_ATTRIBUTE};

/// Attributes returned by a get, in response order.
const PROJECTION: [&str; 3] = [KEY_ATTRIBUTE, "name", "email"];

#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    NotFound,
    StoreError(StoreError),
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::StoreError(err) => Outcome::StoreError(err),
        }
    }

    /// HTTP view of the outcome; store causes are replaced by the
    /// operation's generic message.
    pub fn into_result(self, operation: Operation) -> Result<T, ApiError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::NotFound => Err(ApiError::UserNotFound),
            Outcome::StoreError(_) => Err(ApiError::Store(operation)),
        }
    }
}

fn failed<T>(operation: Operation, user_id: impl Display, err: StoreError) -> Outcome<T> {
    tracing::error!(
        operation = operation.as_str(),
        user_id = %user_id,
        error = %err,
        "Store operation failed"
    );
    Outcome::StoreError(err)
}

/// Reads `userId`, `name` and `email`; attributes missing from the item
/// are left out and any others are never decoded.
pub async fn get_user(store: &dyn UserStore, user_id: &str) -> Outcome<Document> {
    match store.get_item(user_id, &PROJECTION).await {
        Ok(Some(item)) => {
            tracing::info!("Successfully retrieved user with userId: {}", user_id);
            Outcome::Success(item)
        }
        Ok(None) => {
            tracing::info!("User not found with userId: {}", user_id);
            Outcome::NotFound
        }
        Err(err) => failed(Operation::Get, user_id, err),
    }
}

/// Unconditional overwrite; the written record is echoed without a re-read.
pub async fn put_user(store: &dyn UserStore, record: UserRecord) -> Outcome<UserRecord> {
    match store.put_item(&record).await {
        Ok(()) => {
            tracing::info!("Successfully stored user with userId: {}", record.user_id);
            Outcome::Success(record)
        }
        Err(err) => failed(Operation::Create, &record.user_id, err),
    }
}

pub async fn update_user(
    store: &dyn UserStore,
    user_id: &str,
    changes: &UserChanges,
) -> Outcome<Document> {
    match store.update_item(user_id, changes).await {
        Ok(attributes) => {
            tracing::info!("Successfully updated user with userId: {}", user_id);
            Outcome::Success(attributes)
        }
        Err(err) => failed(Operation::Update, user_id, err),
    }
}

pub async fn delete_user(store: &dyn UserStore, user_id: &str) -> Outcome<DeleteResponse> {
    match store.delete_item(user_id).await {
        Ok(()) => {
            tracing::info!("Successfully deleted user with userId: {}", user_id);
            Outcome::Success(DeleteResponse { success: true })
        }
        Err(err) => failed(Operation::Delete, user_id, err),
    }
}

/// Runs `intent` and renders the successful payload as JSON.
pub async fn execute(store: &dyn UserStore, intent: Intent) -> Outcome<JsonValue> {
    match intent {
        Intent::Get { user_id } => get_user(store, &user_id).await.map(JsonValue::Object),
        Intent::Put(record) => put_user(store, record).await.map(|record| {
            serde_json::json!({
                "userId": record.user_id,
                "name": record.name,
                "email": record.email,
            })
        }),
        Intent::Update { user_id, changes } => update_user(store, &user_id, &changes)
            .await
            .map(JsonValue::Object),
        Intent::Delete { user_id } => delete_user(store, &user_id)
            .await
            .map(|ack| serde_json::json!({ "success": ack.success })),
    }
}
