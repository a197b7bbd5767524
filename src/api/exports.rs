//! `exports/*` operations. Exports run in the background; the finished
//! archive is announced by email and via [`info`].

use serde::Serialize;
use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

/// Filters for an [`activity`] export. Every field is optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityExport {
    /// Where to send the notification when the export is ready
    pub notify_email: Option<String>,

    pub date_from: Option<String>,

    pub date_to: Option<String>,

    pub tags: Option<Vec<String>>,

    pub senders: Option<Vec<String>>,

    /// Message states such as `sent`, `rejected` or `bounced`
    pub states: Option<Vec<String>>,
}

pub async fn info<A: Api + ?Sized>(api: &A, id: &str) -> Result<Value> {
    api.call("exports/info", params(json!({"id": id}))).await
}

pub async fn list<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("exports/list", params(json!({}))).await
}

/// Export the rejection blacklist.
pub async fn rejects<A: Api + ?Sized>(api: &A, notify_email: Option<&str>) -> Result<Value> {
    api.call(
        "exports/rejects",
        params(json!({"notify_email": notify_email})),
    )
    .await
}

/// Export the message activity history.
pub async fn activity<A: Api + ?Sized>(api: &A, filter: &ActivityExport) -> Result<Value> {
    api.call("exports/activity", params(serde_json::to_value(filter)?))
        .await
}
