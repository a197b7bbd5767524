use mandrill::{api, ApiError, Client, Config, ConfigError, ErrorKind, KeySources, MandrillError};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key-12345";

fn client_for(server: &MockServer) -> Client {
    let config = Config::new(KEY).with_base_url(format!("{}/api/1.0", server.uri()));
    Client::new(config).unwrap()
}

fn error_body(name: &str, message: &str) -> Value {
    json!({"status": "error", "code": -1, "name": name, "message": message})
}

#[tokio::test]
async fn test_call_returns_body_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/tags/info.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"a": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut params = Map::new();
    params.insert("tag".to_string(), json!("welcome"));

    let result = client.call("tags/info", params).await.unwrap();
    assert_eq!(result, json!({"a": 1}));
}

#[tokio::test]
async fn test_call_injects_key_and_sets_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/templates/info.json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "welcome", "key": KEY})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "welcome"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = api::templates::info(&client, "welcome").await.unwrap();

    // The key goes out with the request but is not part of what comes back
    assert_eq!(result, json!({"name": "welcome"}));
    assert!(result.get("key").is_none());
}

#[tokio::test]
async fn test_call_accepts_array_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/senders/list.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"address": "a@example.com"}, {"address": "b@example.com"}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = api::senders::list(&client).await.unwrap();
    assert_eq!(result.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_ping_uses_object_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/users/ping2.json"))
        .and(body_json(json!({"key": KEY})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"PING": "PONG!"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pong = api::users::ping(&client).await.unwrap();
    assert_eq!(pong, json!({"PING": "PONG!"}));
}

#[tokio::test]
async fn test_known_error_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/users/ping2.json"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_body("Invalid_Key", "bad key")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = api::users::ping(&client).await.unwrap_err();

    match err {
        MandrillError::Api(ApiError::Known { kind, message }) => {
            assert_eq!(kind, ErrorKind::InvalidKey);
            assert_eq!(message, "bad key");
        }
        other => panic!("Expected InvalidKey, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_error_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/users/ping2.json"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_body("Some_Future_Error", "x")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = api::users::ping(&client).await.unwrap_err();

    match err {
        MandrillError::Api(ApiError::Other { name, message }) => {
            assert_eq!(name, "Some_Future_Error");
            assert_eq!(message, "x");
        }
        other => panic!("Expected generic API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/users/ping2.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = api::users::ping(&client).await.unwrap_err();

    match err {
        MandrillError::Api(ApiError::Unexpected(body)) => {
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("Expected unexpected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/users/ping2.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!("PONG!")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = api::users::ping(&client).await.unwrap_err();
    assert!(matches!(err, MandrillError::Api(ApiError::Unexpected(_))));
}

#[tokio::test]
async fn test_unparseable_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/users/ping2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("PONG!"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = api::users::ping(&client).await.unwrap_err();
    assert!(matches!(err, MandrillError::Json(_)));
}

#[tokio::test]
async fn test_identical_calls_give_identical_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/rejects/list.json"))
        .and(body_json(json!({"email": null, "include_expired": false, "key": KEY})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"email": "x@example.com"}])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = api::rejects::list(&client, None, false).await.unwrap();
    let second = api::rejects::list(&client, None, false).await.unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_credential_fails_construction() {
    let empty = tempfile::TempDir::new().unwrap();
    let sources = KeySources {
        env_var: "MANDRILL_INTEGRATION_NEVER_SET".to_string(),
        files: vec![empty.path().join("missing.key")],
    };

    let result = Config::load_from(None, &sources).and_then(Client::new);
    assert!(matches!(
        result,
        Err(MandrillError::Config(ConfigError::MissingCredential))
    ));
}

#[test]
fn test_client_creation_fails_with_empty_key() {
    let result = Client::new(Config::new(""));
    assert!(matches!(
        result,
        Err(MandrillError::Config(ConfigError::MissingCredential))
    ));
}

#[cfg(feature = "live_api_tests")]
mod live_tests {
    use super::*;

    // These tests only run when explicitly enabled with --features live_api_tests
    // and require a valid key in MANDRILL_APIKEY or a key file

    #[tokio::test]
    async fn test_real_ping() {
        let client = Client::from_key(None, true).expect("A Mandrill API key must be configured");
        let pong = api::users::ping(&client).await.expect("API call failed");
        assert_eq!(pong, json!({"PING": "PONG!"}));
    }
}
