use crate::config::Config;
use crate::error::{ApiError, ErrorKind, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameter name the API key is sent under
const KEY_PARAM: &str = "key";

/// Mandrill API client
pub struct Client {
    http_client: HttpClient,
    config: Config,
}

/// Error response from the API
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    status: Option<String>,
    name: Option<String>,
    message: Option<String>,
}

impl Client {
    /// Create a client from an already resolved configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let http_client = HttpClient::builder().build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Resolve the API key (explicit, `MANDRILL_APIKEY`, `~/.mandrill.key`,
    /// `/etc/mandrill.key`) and create a client
    pub fn from_key(api_key: Option<String>, debug: bool) -> Result<Self> {
        let config = Config::load(api_key)?.with_debug(debug);
        Self::new(config)
    }

    /// Call an API operation such as `users/ping` or `messages/send`.
    ///
    /// The API key is added to `params` before sending. Any status other
    /// than 200 is turned into an [`ApiError`].
    pub async fn call(&self, operation: &str, mut params: Map<String, Value>) -> Result<Value> {
        params.insert(
            KEY_PARAM.to_string(),
            Value::String(self.config.api_key.clone()),
        );

        let url = self.url_for(operation);
        tracing::trace!(operation, "calling Mandrill");

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&params)?)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if self.config.debug {
            tracing::debug!(%url, status = status.as_u16(), %body, "Mandrill response");
        }

        if status != StatusCode::OK {
            return Err(cast_error(&body).into());
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url_for(&self, operation: &str) -> String {
        format!(
            "{}/{}.json",
            self.config.base_url.trim_end_matches('/'),
            operation.trim_start_matches('/')
        )
    }
}

/// Turn the body of a failed response into an [`ApiError`]
pub(crate) fn cast_error(body: &str) -> ApiError {
    let unexpected = || ApiError::Unexpected(body.to_string());

    let Ok(error) = serde_json::from_str::<ErrorResponse>(body) else {
        return unexpected();
    };

    let name = match (error.status.as_deref(), error.name) {
        (Some("error"), Some(name)) => name,
        _ => return unexpected(),
    };
    let message = error.message.unwrap_or_default();

    match ErrorKind::from_name(&name) {
        Some(kind) => ApiError::Known { kind, message },
        None => ApiError::Other { name, message },
    }
}
