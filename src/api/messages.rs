//! `messages/*` operations.
//!
//! Message bodies are passed through as JSON; see the Mandrill docs for the
//! shape of the `message` struct (`html`, `subject`, `from_email`, `to`, ...).

use serde::Serialize;
use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

/// Filters for [`search`]. The default matches everything and returns at
/// most 100 messages.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    /// Lucene-style query, `*` for everything
    pub query: String,

    /// Start date, `YYYY-MM-DD`
    pub date_from: Option<String>,

    /// End date, `YYYY-MM-DD`
    pub date_to: Option<String>,

    pub tags: Option<Vec<String>>,

    pub senders: Option<Vec<String>>,

    pub limit: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: "*".to_string(),
            date_from: None,
            date_to: None,
            tags: None,
            senders: None,
            limit: 100,
        }
    }
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Send a message. With `send_async` the API answers before delivery is
/// attempted.
pub async fn send<A: Api + ?Sized>(api: &A, message: &Value, send_async: bool) -> Result<Value> {
    api.call(
        "messages/send",
        params(json!({"message": message, "async": send_async})),
    )
    .await
}

/// Send a message rendered from a stored template.
pub async fn send_template<A: Api + ?Sized>(
    api: &A,
    template_name: &str,
    template_content: &Value,
    message: &Value,
    send_async: bool,
) -> Result<Value> {
    api.call(
        "messages/send-template",
        params(json!({
            "template_name": template_name,
            "template_content": template_content,
            "message": message,
            "async": send_async,
        })),
    )
    .await
}

pub async fn search<A: Api + ?Sized>(api: &A, query: &SearchQuery) -> Result<Value> {
    api.call("messages/search", params(serde_json::to_value(query)?))
        .await
}

/// Details of a single sent message.
pub async fn info<A: Api + ?Sized>(api: &A, id: &str) -> Result<Value> {
    api.call("messages/info", params(json!({"id": id}))).await
}

/// Parse a full MIME document into the `message` struct shape.
pub async fn parse<A: Api + ?Sized>(api: &A, raw_message: &str) -> Result<Value> {
    api.call("messages/parse", params(json!({"raw_message": raw_message})))
        .await
}

/// Send a full MIME document. `from_email`, `from_name` and `to` override
/// the headers in `raw_message` when given.
pub async fn send_raw<A: Api + ?Sized>(
    api: &A,
    raw_message: &str,
    from_email: Option<&str>,
    from_name: Option<&str>,
    to: Option<&[&str]>,
    send_async: bool,
) -> Result<Value> {
    api.call(
        "messages/send-raw",
        params(json!({
            "raw_message": raw_message,
            "from_email": from_email,
            "from_name": from_name,
            "to": to,
            "async": send_async,
        })),
    )
    .await
}
