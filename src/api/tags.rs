//! `tags/*` operations.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

pub async fn list<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("tags/list", params(json!({}))).await
}

pub async fn info<A: Api + ?Sized>(api: &A, tag: &str) -> Result<Value> {
    api.call("tags/info", params(json!({"tag": tag}))).await
}

pub async fn time_series<A: Api + ?Sized>(api: &A, tag: &str) -> Result<Value> {
    api.call("tags/time-series", params(json!({"tag": tag})))
        .await
}

/// Hourly stats across every tag.
pub async fn all_time_series<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("tags/all-time-series", params(json!({}))).await
}
