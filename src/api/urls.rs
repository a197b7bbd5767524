//! `urls/*` operations on tracked links.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

/// The 100 most clicked URLs.
pub async fn list<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("urls/list", params(json!({}))).await
}

pub async fn search<A: Api + ?Sized>(api: &A, q: &str) -> Result<Value> {
    api.call("urls/search", params(json!({"q": q}))).await
}

pub async fn time_series<A: Api + ?Sized>(api: &A, url: &str) -> Result<Value> {
    api.call("urls/time-series", params(json!({"url": url})))
        .await
}
