//! Backing table access.
//!
//! The [`UserStore`] trait exposes the four single-item primitives the
//! service needs. Items travel as JSON objects keyed by attribute name so
//! callers never see backend-specific types.

pub mod conversions;
pub mod dynamodb;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use crate::models::UserRecord;

pub use dynamodb::DynamoUserStore;

/// Partition key attribute of the users table.
pub const KEY_ATTRIBUTE: &str = "userId";

/// A stored item, attribute name to value.
pub type Document = Map<String, JsonValue>;

/// New values for the two mutable attributes.
///
/// `None` is written as an explicit null; it does not leave the stored
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<JsonValue>,
    pub email: Option<JsonValue>,
}

/// Errors raised by a store round trip.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
    #[error("Malformed item: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Single-item access to the users table.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches the item stored under `user_id`, keeping only the named
    /// `attributes` it actually has. Other attributes are never decoded.
    async fn get_item(&self, user_id: &str, attributes: &[&str]) -> Result<Option<Document>>;

    /// Writes `record`, replacing any item with the same key. A key that is
    /// not a string is rejected by the table.
    async fn put_item(&self, record: &UserRecord) -> Result<()>;

    /// Sets `name` and `email` on the item and returns every attribute
    /// after the write. A missing item is created.
    async fn update_item(&self, user_id: &str, changes: &UserChanges) -> Result<Document>;

    /// Removes the item. Removing a missing key succeeds.
    async fn delete_item(&self, user_id: &str) -> Result<()>;
}
