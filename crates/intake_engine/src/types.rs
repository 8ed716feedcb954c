use std::fmt;
use std::io;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub type RequestId = u64;

/// Body of the outbound lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest<'a> {
    pub upc: &'a str,
}

/// Success body returned by the lookup service. A missing or `null`
/// `items` field decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LookupResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ProductItem>,
}

/// One product entry as reported by the service. Text fields accept any
/// JSON scalar; missing, `null`, `false`, zero and non-scalar values decode
/// as empty strings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProductItem {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub brand: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub category: String,
    #[serde(default)]
    pub lowest_recorded_price: Option<Value>,
}

impl ProductItem {
    /// Price as form text, following the same rules as the text fields.
    pub fn price_text(&self) -> String {
        self.lowest_recorded_price
            .as_ref()
            .map(value_text)
            .unwrap_or_default()
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .map(value_text)
        .unwrap_or_default())
}

/// Numbers render in shortest decimal form (`10.0` becomes `10`).
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(number) if number.is_i64() || number.is_u64() => {
            if number.as_f64() == Some(0.0) {
                String::new()
            } else {
                number.to_string()
            }
        }
        Value::Number(number) => match number.as_f64() {
            Some(float) if float != 0.0 => float.to_string(),
            _ => String::new(),
        },
        Value::Null | Value::Bool(false) | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LookupCompleted {
        request_id: RequestId,
        upc: String,
        result: Result<ProductItem, LookupError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LookupError {
    pub kind: FailureKind,
    pub message: String,
}

impl LookupError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn not_found() -> Self {
        Self::new(FailureKind::NotFound, "No product found for this UPC")
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FailureKind::NotFound
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service answered with an empty item list.
    NotFound,
    HttpStatus(u16),
    Timeout,
    Network,
    InvalidRequest,
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
        }
    }
}

/// Setup failures; lookups themselves report `LookupError`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid lookup endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_fields_become_empty() {
        let response: LookupResponse = serde_json::from_value(json!({
            "items": [{ "title": "Only title", "brand": null }]
        }))
        .unwrap();

        let item = &response.items[0];
        assert_eq!(item.title, "Only title");
        assert_eq!(item.brand, "");
        assert_eq!(item.description, "");
        assert_eq!(item.category, "");
        assert_eq!(item.price_text(), "");
    }

    #[test]
    fn missing_or_null_items_is_empty() {
        let missing: LookupResponse = serde_json::from_value(json!({ "code": "OK" })).unwrap();
        let null: LookupResponse = serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(missing.items.is_empty());
        assert!(null.items.is_empty());
    }

    #[test]
    fn price_text_follows_form_rules() {
        let price = |value: Value| ProductItem {
            lowest_recorded_price: Some(value),
            ..ProductItem::default()
        };
        assert_eq!(price(json!(9.99)).price_text(), "9.99");
        assert_eq!(price(json!(12)).price_text(), "12");
        assert_eq!(price(json!(10.0)).price_text(), "10");
        assert_eq!(price(json!(0.5)).price_text(), "0.5");
        assert_eq!(price(json!(0)).price_text(), "");
        assert_eq!(price(json!(0.0)).price_text(), "");
        assert_eq!(price(json!("4.50")).price_text(), "4.50");
        assert_eq!(price(Value::Null).price_text(), "");
    }

    #[test]
    fn scalar_text_fields_are_kept_as_text() {
        let response: LookupResponse = serde_json::from_value(json!({
            "items": [{
                "title": 123,
                "description": true,
                "brand": false,
                "category": ["Tools"],
                "lowest_recorded_price": 10.0
            }]
        }))
        .unwrap();

        let item = &response.items[0];
        assert_eq!(item.title, "123");
        assert_eq!(item.description, "true");
        assert_eq!(item.brand, "");
        assert_eq!(item.category, "");
        assert_eq!(item.price_text(), "10");
    }

    #[test]
    fn request_body_is_upc_object() {
        let body = serde_json::to_value(LookupRequest { upc: "0123" }).unwrap();
        assert_eq!(body, json!({ "upc": "0123" }));
    }
}
