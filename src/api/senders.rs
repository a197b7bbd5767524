//! `senders/*` operations.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

pub async fn list<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("senders/list", params(json!({}))).await
}

/// Sender domains with their SPF and DKIM status.
pub async fn domains<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("senders/domains", params(json!({}))).await
}

pub async fn info<A: Api + ?Sized>(api: &A, address: &str) -> Result<Value> {
    api.call("senders/info", params(json!({"address": address})))
        .await
}

pub async fn time_series<A: Api + ?Sized>(api: &A, address: &str) -> Result<Value> {
    api.call("senders/time-series", params(json!({"address": address})))
        .await
}
