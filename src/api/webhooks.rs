//! `webhooks/*` operations.
//!
//! `events` is any subset of `send`, `hard_bounce`, `soft_bounce`, `open`,
//! `click`, `spam`, `unsub` and `reject`; an empty slice registers none.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

pub async fn list<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("webhooks/list", params(json!({}))).await
}

pub async fn add<A: Api + ?Sized>(api: &A, url: &str, events: &[&str]) -> Result<Value> {
    api.call(
        "webhooks/add",
        params(json!({"url": url, "events": events})),
    )
    .await
}

pub async fn info<A: Api + ?Sized>(api: &A, id: u64) -> Result<Value> {
    api.call("webhooks/info", params(json!({"id": id}))).await
}

pub async fn update<A: Api + ?Sized>(
    api: &A,
    id: u64,
    url: &str,
    events: &[&str],
) -> Result<Value> {
    api.call(
        "webhooks/update",
        params(json!({"id": id, "url": url, "events": events})),
    )
    .await
}

pub async fn delete<A: Api + ?Sized>(api: &A, id: u64) -> Result<Value> {
    api.call("webhooks/delete", params(json!({"id": id})))
        .await
}
