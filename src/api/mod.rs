//! Resource wrappers grouped the way the Mandrill API groups its operations.
//!
//! Every function here builds the parameter object for one operation and
//! hands it to [`Api::call`]; none of them inspect the response.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::client::Client;
use crate::error::Result;

pub mod exports;
pub mod inbound;
pub mod messages;
pub mod rejects;
pub mod senders;
pub mod tags;
pub mod templates;
pub mod urls;
pub mod users;
pub mod webhooks;

/// Anything that can perform an authenticated Mandrill call.
#[async_trait]
pub trait Api: Send + Sync {
    async fn call(&self, operation: &str, params: Map<String, Value>) -> Result<Value>;
}

#[async_trait]
impl Api for Client {
    async fn call(&self, operation: &str, params: Map<String, Value>) -> Result<Value> {
        Client::call(self, operation, params).await
    }
}

/// Unwrap a `json!({...})` literal into a parameter map.
pub(crate) fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
