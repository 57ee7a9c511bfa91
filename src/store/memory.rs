//! In-memory users tables for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::sync::RwLock;

use super::{Document, Result, StoreError, UserChanges, UserStore, KEY_ATTRIBUTE};
use crate::models::UserRecord;

/// Mirrors the table semantics the service relies on: the key must be a
/// string, put overwrites, update creates missing items and writes nulls,
/// delete of a missing key is a no-op.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    items: Arc<RwLock<HashMap<String, Document>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw item, bypassing the service's own write paths.
    pub async fn insert_raw(&self, item: Document) {
        let key = item
            .get(KEY_ATTRIBUTE)
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();
        self.items.write().await.insert(key, item);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

fn optional_json(value: &Option<JsonValue>) -> JsonValue {
    value.clone().unwrap_or(JsonValue::Null)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_item(&self, user_id: &str, attributes: &[&str]) -> Result<Option<Document>> {
        let items = self.items.read().await;
        Ok(items.get(user_id).map(|item| {
            item.iter()
                .filter(|(name, _)| attributes.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        }))
    }

    async fn put_item(&self, record: &UserRecord) -> Result<()> {
        let Some(key) = record.user_id.as_str() else {
            return Err(StoreError::Request {
                operation: "PutItem",
                message: "ValidationException: Type mismatch for key userId expected: S"
                    .to_string(),
            });
        };

        let mut item = Document::new();
        item.insert(KEY_ATTRIBUTE.to_string(), record.user_id.clone());
        item.insert("name".to_string(), record.name.clone());
        item.insert("email".to_string(), record.email.clone());

        self.items.write().await.insert(key.to_string(), item);
        Ok(())
    }

    async fn update_item(&self, user_id: &str, changes: &UserChanges) -> Result<Document> {
        let mut items = self.items.write().await;
        let item = items.entry(user_id.to_string()).or_insert_with(|| {
            let mut item = Document::new();
            item.insert(KEY_ATTRIBUTE.to_string(), JsonValue::String(user_id.to_string()));
            item
        });
        item.insert("name".to_string(), optional_json(&changes.name));
        item.insert("email".to_string(), optional_json(&changes.email));
        Ok(item.clone())
    }

    async fn delete_item(&self, user_id: &str) -> Result<()> {
        self.items.write().await.remove(user_id);
        Ok(())
    }
}

/// Every call fails, as if the table were unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingUserStore;

fn unavailable(operation: &'static str) -> StoreError {
    StoreError::Request {
        operation,
        message: "dispatch failure: connection refused (localhost:8000)".to_string(),
    }
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn get_item(&self, _user_id: &str, _attributes: &[&str]) -> Result<Option<Document>> {
        Err(unavailable("GetItem"))
    }

    async fn put_item(&self, _record: &UserRecord) -> Result<()> {
        Err(unavailable("PutItem"))
    }

    async fn update_item(&self, _user_id: &str, _changes: &UserChanges) -> Result<Document> {
        Err(unavailable("UpdateItem"))
    }

    async fn delete_item(&self, _user_id: &str) -> Result<()> {
        Err(unavailable("DeleteItem"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL: [&str; 3] = ["userId", "name", "email"];

    fn record(user_id: &str, name: &str) -> UserRecord {
        UserRecord {
            user_id: json!(user_id),
            name: json!(name),
            email: json!(format!("{}@x.com", user_id)),
        }
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryUserStore::new();
        store.put_item(&record("u1", "Ann")).await.unwrap();
        store.put_item(&record("u1", "Bea")).await.unwrap();

        let item = store.get_item("u1", &ALL).await.unwrap().unwrap();
        assert_eq!(item.get("name"), Some(&json!("Bea")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_rejects_non_string_key() {
        let store = InMemoryUserStore::new();
        let record = UserRecord {
            user_id: json!(42),
            name: json!("Ann"),
            email: json!("ann@x.com"),
        };

        let result = store.put_item(&record).await;

        assert!(matches!(result, Err(StoreError::Request { operation: "PutItem", .. })));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_get_keeps_only_requested_attributes() {
        let store = InMemoryUserStore::new();
        let mut item = Document::new();
        item.insert("userId".to_string(), json!("u1"));
        item.insert("name".to_string(), json!("Ann"));
        item.insert("avatar".to_string(), json!({"type": "Buffer", "data": [1]}));
        store.insert_raw(item).await;

        let item = store.get_item("u1", &ALL).await.unwrap().unwrap();

        assert_eq!(JsonValue::Object(item), json!({"userId": "u1", "name": "Ann"}));
    }

    #[tokio::test]
    async fn test_update_creates_missing_item_with_nulls() {
        let store = InMemoryUserStore::new();
        let changes = UserChanges {
            name: Some(json!("Ghost")),
            email: None,
        };

        let item = store.update_item("u9", &changes).await.unwrap();

        assert_eq!(
            JsonValue::Object(item),
            json!({"userId": "u9", "name": "Ghost", "email": null})
        );
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = InMemoryUserStore::new();
        store.delete_item("nobody").await.unwrap();
        assert_eq!(store.len().await, 0);
    }
}
