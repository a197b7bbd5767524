//! `inbound/*` operations for inbound mail domains and routes.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

pub async fn domains<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("inbound/domains", params(json!({}))).await
}

/// Mailbox routes configured for `domain`.
pub async fn routes<A: Api + ?Sized>(api: &A, domain: &str) -> Result<Value> {
    api.call("inbound/routes", params(json!({"domain": domain})))
        .await
}

/// Feed a raw MIME message through the inbound pipeline as if it had been
/// received over SMTP.
pub async fn send_raw<A: Api + ?Sized>(
    api: &A,
    raw_message: &str,
    to: Option<&[&str]>,
    mail_from: Option<&str>,
    helo: Option<&str>,
    client_address: Option<&str>,
) -> Result<Value> {
    api.call(
        "inbound/send-raw",
        params(json!({
            "raw_message": raw_message,
            "to": to,
            "mail_from": mail_from,
            "helo": helo,
            "client_address": client_address,
        })),
    )
    .await
}
