//! `rejects/*` operations on the rejection blacklist.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

/// List blacklisted addresses, optionally narrowed to one `email`.
pub async fn list<A: Api + ?Sized>(
    api: &A,
    email: Option<&str>,
    include_expired: bool,
) -> Result<Value> {
    api.call(
        "rejects/list",
        params(json!({"email": email, "include_expired": include_expired})),
    )
    .await
}

/// Remove an address from the blacklist.
pub async fn delete<A: Api + ?Sized>(api: &A, email: &str) -> Result<Value> {
    api.call("rejects/delete", params(json!({"email": email})))
        .await
}
