//! `users/*` operations.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

/// Username, reputation, quotas and sending stats of the key's owner.
pub async fn info<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("users/info", params(json!({}))).await
}

/// Validate the key. Uses `users/ping2`, which answers with the object
/// `{"PING": "PONG!"}` instead of a bare JSON string.
pub async fn ping<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("users/ping2", params(json!({}))).await
}

pub async fn senders<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("users/senders", params(json!({}))).await
}
