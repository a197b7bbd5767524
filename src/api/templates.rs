//! `templates/*` operations.

use serde_json::{json, Value};

use super::{params, Api};
use crate::error::Result;

/// Add a new template. `publish = false` stores a draft only.
pub async fn add<A: Api + ?Sized>(api: &A, name: &str, code: &str, publish: bool) -> Result<Value> {
    api.call(
        "templates/add",
        params(json!({"name": name, "code": code, "publish": publish})),
    )
    .await
}

pub async fn info<A: Api + ?Sized>(api: &A, name: &str) -> Result<Value> {
    api.call("templates/info", params(json!({"name": name})))
        .await
}

/// Replace the code of an existing template.
pub async fn update<A: Api + ?Sized>(
    api: &A,
    name: &str,
    code: &str,
    publish: bool,
) -> Result<Value> {
    api.call(
        "templates/update",
        params(json!({"name": name, "code": code, "publish": publish})),
    )
    .await
}

/// Promote the draft content so new sends use it.
pub async fn publish<A: Api + ?Sized>(api: &A, name: &str) -> Result<Value> {
    api.call("templates/publish", params(json!({"name": name})))
        .await
}

pub async fn delete<A: Api + ?Sized>(api: &A, name: &str) -> Result<Value> {
    api.call("templates/delete", params(json!({"name": name})))
        .await
}

pub async fn list<A: Api + ?Sized>(api: &A) -> Result<Value> {
    api.call("templates/list", params(json!({}))).await
}

/// Hourly stats for the last 30 days.
pub async fn time_series<A: Api + ?Sized>(api: &A, name: &str) -> Result<Value> {
    api.call("templates/time-series", params(json!({"name": name})))
        .await
}

/// Render a template with the given editable-region content and optional
/// merge variables, returning `{"html": ...}`.
///
/// `template_content` and `merge_vars` are arrays of `{"name", "content"}`
/// objects.
pub async fn render<A: Api + ?Sized>(
    api: &A,
    template_name: &str,
    template_content: &Value,
    merge_vars: Option<&Value>,
) -> Result<Value> {
    api.call(
        "templates/render",
        params(json!({
            "template_name": template_name,
            "template_content": template_content,
            "merge_vars": merge_vars,
        })),
    )
    .await
}
