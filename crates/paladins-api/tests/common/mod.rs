/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for paladins-api tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use paladins_api::http::signature::signature;
use paladins_api::{ClientConfig, PaladinsClient, Session, SessionStore};
use uuid::Uuid;
use wiremock::matchers::{method, path_regex};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

pub const DEV_ID: &str = "1004";
pub const AUTH_KEY: &str = "23DF3C7E9BD14D84BF892AD206B6755C";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fresh directory under the system temp dir
pub fn temp_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("paladins-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&path).unwrap();
    path
}

pub fn test_config(server: &MockServer, dir: &std::path::Path) -> ClientConfig {
    let mut config = ClientConfig::new(DEV_ID, AUTH_KEY);
    config.base_url = server.uri();
    config.session_path = dir.join("session.json");
    config
}

/// Client whose session file already holds `token`
pub fn client_with_session(
    server: &MockServer,
    dir: &std::path::Path,
    token: &str,
) -> PaladinsClient {
    let config = test_config(server, dir);
    SessionStore::open(&config.session_path)
        .unwrap()
        .replace(Session::new(token, "20240101000000", serde_json::Value::Null))
        .unwrap();
    PaladinsClient::with_config(config).unwrap()
}

/// Answer every createsession call with `token`
pub async fn mount_create_session(server: &MockServer, token: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/createsessionJson/"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ret_msg": "Approved",
            "session_id": token,
            "timestamp": "1/1/2024 12:00:00 AM"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Path regex for `method` called with `session`
pub fn call_path(method: &str, session: &str) -> String {
    format!(r"^/{method}Json/{DEV_ID}/[0-9a-f]{{32}}/{session}/[0-9]{{14}}")
}

pub fn invalid_session_body() -> serde_json::Value {
    serde_json::json!([{ "ret_msg": "Invalid session id." }])
}

/// Matches requests whose signature segment is md5(devId + method + authKey + timestamp)
pub struct ValidSignature;

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let segments: Vec<&str> = request
            .url
            .path()
            .trim_start_matches('/')
            .split('/')
            .collect();
        let (Some(method_json), Some(dev_id), Some(sig)) =
            (segments.first(), segments.get(1), segments.get(2))
        else {
            return false;
        };
        let Some(method) = method_json.strip_suffix("Json") else {
            return false;
        };
        // createsession has no session segment before the timestamp
        let ts_index = if method == "createsession" { 3 } else { 4 };
        let Some(ts) = segments.get(ts_index) else {
            return false;
        };
        *dev_id == DEV_ID && *sig == signature(DEV_ID, method, AUTH_KEY, ts)
    }
}
