//! DynamoDB attribute conversion functions.
//!
//! Pure functions between `AttributeValue` maps and the JSON shapes the
//! service accepts and returns. Testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{json, Number, Value as JsonValue};

use super::{Document, StoreError, KEY_ATTRIBUTE};
use crate::models::UserRecord;

/// Convert a UserRecord to a DynamoDB item.
pub fn record_to_item(record: &UserRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(KEY_ATTRIBUTE.to_string(), json_to_attribute(&record.user_id));
    item.insert("name".to_string(), json_to_attribute(&record.name));
    item.insert("email".to_string(), json_to_attribute(&record.email));
    item
}

/// Value for an update expression placeholder. An absent field becomes NULL.
pub fn optional_attribute(value: Option<&JsonValue>) -> AttributeValue {
    value.map(json_to_attribute).unwrap_or(AttributeValue::Null(true))
}

/// Convert a JSON value to an attribute, lists and maps included.
pub fn json_to_attribute(value: &JsonValue) -> AttributeValue {
    match value {
        JsonValue::Null => AttributeValue::Null(true),
        JsonValue::Bool(b) => AttributeValue::Bool(*b),
        JsonValue::Number(n) => AttributeValue::N(n.to_string()),
        JsonValue::String(s) => AttributeValue::S(s.clone()),
        JsonValue::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        JsonValue::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(name, value)| (name.clone(), json_to_attribute(value)))
                .collect(),
        ),
    }
}

/// Keep only the named attributes of an item.
pub fn project_item(
    mut item: HashMap<String, AttributeValue>,
    attributes: &[&str],
) -> HashMap<String, AttributeValue> {
    item.retain(|name, _| attributes.contains(&name.as_str()));
    item
}

/// Convert a DynamoDB item to a JSON document.
pub fn item_to_document(
    item: &HashMap<String, AttributeValue>,
) -> Result<Document, StoreError> {
    item.iter()
        .map(|(name, value)| attribute_to_json(value).map(|json| (name.clone(), json)))
        .collect()
}

/// Convert a single attribute value to JSON.
///
/// Binary values render as `{"type": "Buffer", "data": [..bytes]}`.
pub fn attribute_to_json(value: &AttributeValue) -> Result<JsonValue, StoreError> {
    let json = match value {
        AttributeValue::S(s) => JsonValue::String(s.clone()),
        AttributeValue::N(n) => JsonValue::Number(parse_number(n)?),
        AttributeValue::Bool(b) => JsonValue::Bool(*b),
        AttributeValue::Null(_) => JsonValue::Null,
        AttributeValue::L(values) => JsonValue::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => JsonValue::Object(item_to_document(map)?),
        AttributeValue::Ss(values) => {
            JsonValue::Array(values.iter().cloned().map(JsonValue::String).collect())
        }
        AttributeValue::Ns(values) => JsonValue::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(JsonValue::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::B(blob) => buffer_json(blob),
        AttributeValue::Bs(blobs) => JsonValue::Array(blobs.iter().map(buffer_json).collect()),
        other => {
            return Err(StoreError::Malformed(format!(
                "unsupported attribute type: {:?}",
                other
            )))
        }
    };
    Ok(json)
}

fn buffer_json(blob: &Blob) -> JsonValue {
    let bytes: &[u8] = blob.as_ref();
    json!({ "type": "Buffer", "data": bytes })
}

fn parse_number(n: &str) -> Result<Number, StoreError> {
    n.parse::<Number>()
        .map_err(|_| StoreError::Malformed(format!("invalid number attribute: {}", n)))
}
