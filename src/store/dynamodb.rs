use std::fmt::Debug;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use super::conversions::{item_to_document, optional_attribute, project_item, record_to_item};
use super::{Document, Result, StoreError, UserChanges, UserStore, KEY_ATTRIBUTE};
use crate::config::{Config, LOCAL_REGION};
use crate::models::UserRecord;

/// Sets both mutable attributes; `name` is a reserved word in DynamoDB.
const UPDATE_EXPRESSION: &str = "set #name = :name, email = :email";

/// Shareable DynamoDB table handle for use across async handlers
#[derive(Clone)]
pub struct DynamoUserStore {
    client: Client,
    table_name: String,
}

impl DynamoUserStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Create a table handle from configuration
    ///
    /// In offline mode the client targets DynamoDB Local with region
    /// `localhost` and placeholder credentials. Otherwise the AWS default
    /// credential and region chains apply.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        match config.offline_endpoint() {
            Some(endpoint) => {
                tracing::info!("Connecting to DynamoDB Local at: {}", endpoint);
                loader = loader
                    .region(Region::new(LOCAL_REGION))
                    .endpoint_url(endpoint)
                    .credentials_provider(Credentials::new(
                        "local",
                        "local",
                        None,
                        None,
                        "users-offline",
                    ));
            }
            None => {
                tracing::info!("Connecting to AWS DynamoDB");
                if let Some(region) = &config.aws_region {
                    loader = loader.region(Region::new(region.clone()));
                }
            }
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.users_table.clone())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(user_id: &str) -> AttributeValue {
        AttributeValue::S(user_id.to_string())
    }
}

/// Collapse an SDK error into a StoreError, keeping the full error chain as text.
fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug,
{
    StoreError::Request {
        operation,
        message: DisplayErrorContext(&err).to_string(),
    }
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn get_item(&self, user_id: &str, attributes: &[&str]) -> Result<Option<Document>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(user_id))
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", e))?;

        match result.item {
            Some(item) => {
                tracing::debug!("Read item with userId: {}", user_id);
                Ok(Some(item_to_document(&project_item(item, attributes))?))
            }
            None => Ok(None),
        }
    }

    async fn put_item(&self, record: &UserRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", e))?;

        tracing::debug!("Put item with userId: {}", record.user_id);
        Ok(())
    }

    async fn update_item(&self, user_id: &str, changes: &UserChanges) -> Result<Document> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(user_id))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#name", "name")
            .expression_attribute_values(":name", optional_attribute(changes.name.as_ref()))
            .expression_attribute_values(":email", optional_attribute(changes.email.as_ref()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateItem", e))?;

        tracing::debug!("Updated item with userId: {}", user_id);
        match result.attributes {
            Some(attributes) => item_to_document(&attributes),
            None => Ok(Document::new()),
        }
    }

    async fn delete_item(&self, user_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(user_id))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;

        tracing::debug!("Deleted item with userId: {}", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use serde_json::json;

    #[test]
    fn test_store_is_clonable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<DynamoUserStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DynamoUserStore>();
    }

    #[tokio::test]
    async fn test_from_config_uses_table_name() {
        let store = DynamoUserStore::from_config(&test_config()).await;
        assert_eq!(store.table_name(), "users-table-test");
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000 with a users-table-test table"]
    async fn test_round_trip_against_dynamodb_local() {
        let store = DynamoUserStore::from_config(&test_config()).await;
        let user_id = "dynamo-local-u1";
        let record = UserRecord {
            user_id: json!(user_id),
            name: json!("Ann"),
            email: json!("ann@x.com"),
        };
        let fields = ["userId", "name", "email"];

        store.put_item(&record).await.unwrap();
        let item = store.get_item(user_id, &fields).await.unwrap().unwrap();
        assert_eq!(item.get("name"), Some(&json!("Ann")));

        let changes = UserChanges {
            name: Some(json!("Annie")),
            email: None,
        };
        let updated = store.update_item(user_id, &changes).await.unwrap();
        assert_eq!(updated.get("name"), Some(&json!("Annie")));
        assert!(updated.get("email").is_some_and(|v| v.is_null()));

        store.delete_item(user_id).await.unwrap();
        store.delete_item(user_id).await.unwrap();
        assert!(store.get_item(user_id, &fields).await.unwrap().is_none());
    }
}
