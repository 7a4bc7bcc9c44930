/*
[INPUT]:  Session store, HTTP client, developer credentials
[OUTPUT]: A valid session token, created or renewed on demand
[POS]:    Auth layer - orchestrates session creation and renewal
[UPDATE]: When the createsession flow or renewal policy changes
*/

use std::sync::OnceLock;

use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::session::Session;
use super::store::SessionStore;
use crate::http::executor::{execute, is_developer_rejection};
use crate::http::signature::timestamp;
use crate::http::url_builder::{SignedRequest, UrlArgs};
use crate::http::{PaladinsError, RequestSigner, Result};
use crate::types::CreateSessionResponse;

pub const CREATE_SESSION_METHOD: &str = "createsession";

/// Hands out session tokens and serializes their creation.
///
/// Creation and renewal share one lock, so concurrent callers that all
/// find the token missing or expired wait for a single createsession call.
#[derive(Debug)]
pub struct SessionManager {
    store: SessionStore,
    http: Client,
    base_url: String,
    signer: RequestSigner,
    renew_lock: Mutex<()>,
    rejected: OnceLock<String>,
}

impl SessionManager {
    pub fn new(
        store: SessionStore,
        http: Client,
        base_url: impl Into<String>,
        signer: RequestSigner,
    ) -> Self {
        Self {
            store,
            http,
            base_url: base_url.into(),
            signer,
            renew_lock: Mutex::new(()),
            rejected: OnceLock::new(),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Return the cached token, creating a session if there is none
    pub async fn ensure_session(&self) -> Result<String> {
        if let Some(token) = self.store.token() {
            return Ok(token);
        }

        let _guard = self.renew_lock.lock().await;
        if let Some(token) = self.store.token() {
            debug!("session created by a concurrent caller");
            return Ok(token);
        }

        self.issue_session().await
    }

    /// Replace `stale` with a fresh session.
    ///
    /// If another caller already renewed past `stale`, its token is returned
    /// without a second createsession call.
    pub async fn renew_session(&self, stale: &str) -> Result<String> {
        let _guard = self.renew_lock.lock().await;
        if let Some(token) = self.store.token() {
            if token != stale {
                debug!("session already renewed by a concurrent caller");
                return Ok(token);
            }
        }

        info!("discarding expired session");
        self.store.discard();
        self.issue_session().await
    }

    /// Must be called with `renew_lock` held
    async fn issue_session(&self) -> Result<String> {
        if let Some(message) = self.rejected.get() {
            return Err(PaladinsError::UnauthorizedDeveloper {
                message: message.clone(),
            });
        }

        let session = match self.create_session().await {
            Ok(session) => session,
            Err(err @ PaladinsError::UnauthorizedDeveloper { .. }) => {
                // The stale token must not survive a restart either.
                self.store.clear()?;
                return Err(err);
            }
            Err(err) => return Err(err),
        };
        let token = session.token.clone();
        self.store.replace(session)?;
        info!(path = %self.store.path().display(), "session created");
        Ok(token)
    }

    async fn create_session(&self) -> Result<Session> {
        let ts = timestamp();
        let signature = self.signer.sign(CREATE_SESSION_METHOD, &ts);
        let args = UrlArgs::new();
        let url = SignedRequest {
            method: CREATE_SESSION_METHOD,
            dev_id: self.signer.dev_id(),
            signature: &signature,
            session: None,
            timestamp: &ts,
            args: &args,
        }
        .to_url(&self.base_url);

        debug!(method = CREATE_SESSION_METHOD, "requesting new session");
        let body = execute(&self.http, &url).await?;
        let response = parse_create_session(&body)?;
        let ret_msg = response.ret_msg.unwrap_or_default();

        if is_developer_rejection(&ret_msg) {
            warn!(ret_msg = %ret_msg, "developer credentials rejected");
            let _ = self.rejected.set(ret_msg.clone());
            return Err(PaladinsError::UnauthorizedDeveloper { message: ret_msg });
        }

        match response.session_id.filter(|id| !id.is_empty()) {
            Some(token) => Ok(Session::new(token, ts, body)),
            None if ret_msg.is_empty() => Err(PaladinsError::InvalidResponse(
                "createsession returned no session_id".to_string(),
            )),
            None => Err(PaladinsError::Api { message: ret_msg }),
        }
    }
}

fn parse_create_session(body: &Value) -> Result<CreateSessionResponse> {
    let object = match body {
        Value::Array(rows) => rows.first().ok_or_else(|| {
            PaladinsError::InvalidResponse("createsession returned an empty array".to_string())
        })?,
        other => other,
    };
    Ok(serde_json::from_value(object.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use serde_json::json;
    use uuid::Uuid;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("paladins-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn manager(server: &MockServer, dir: &Path) -> SessionManager {
        let store = SessionStore::open(dir.join("session.json")).unwrap();
        SessionManager::new(
            store,
            Client::new(),
            server.uri(),
            RequestSigner::new("1004", "KEY"),
        )
    }

    #[test]
    fn test_parse_create_session_accepts_array() {
        let body = json!([{"ret_msg": "Approved", "session_id": "ABC", "timestamp": "1/2/2024"}]);
        let parsed = parse_create_session(&body).unwrap();
        assert_eq!(parsed.session_id.as_deref(), Some("ABC"));
    }

    #[tokio::test]
    async fn test_ensure_session_creates_and_caches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/createsessionJson/1004/[0-9a-f]{32}/[0-9]{14}$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ret_msg": "Approved",
                "session_id": "SESSION1",
                "timestamp": "1/2/2024 3:04:05 AM"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = temp_dir();
        let manager = manager(&server, &dir);

        assert_eq!(manager.ensure_session().await.unwrap(), "SESSION1");
        assert_eq!(manager.ensure_session().await.unwrap(), "SESSION1");

        let stored = manager.store().current().unwrap();
        assert_eq!(stored.created_at.len(), 14);
        assert_eq!(stored.raw["ret_msg"], "Approved");

        fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_developer_leaves_store_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/createsessionJson/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ret_msg": "Exception while validating developer access.Invalid developer id.",
                "session_id": null,
                "timestamp": "1/2/2024 3:04:05 AM"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = temp_dir();
        let manager = manager(&server, &dir);

        let err = manager.ensure_session().await.unwrap_err();
        assert!(matches!(err, PaladinsError::UnauthorizedDeveloper { .. }));
        assert!(!manager.store().is_active());

        // Not retried against the service.
        let err = manager.ensure_session().await.unwrap_err();
        assert!(matches!(err, PaladinsError::UnauthorizedDeveloper { .. }));

        let reloaded = SessionStore::open(dir.join("session.json")).unwrap();
        assert!(reloaded.current().is_none());

        fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_renewals_issue_one_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/createsessionJson/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ret_msg": "Approved",
                "session_id": "FRESH"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = temp_dir();
        let manager = Arc::new(manager(&server, &dir));
        manager
            .store()
            .replace(Session::new("STALE", "20240102030405", Value::Null))
            .unwrap();

        let renewals = (0..8).map(|_| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.renew_session("STALE").await })
        });
        let results = futures_util::future::join_all(renewals).await;

        for result in results {
            assert_eq!(result.unwrap().unwrap(), "FRESH");
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_session_id_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/createsessionJson/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ret_msg": "Maximum number of active sessions reached",
                "session_id": ""
            })))
            .mount(&server)
            .await;

        let dir = temp_dir();
        let manager = manager(&server, &dir);

        let err = manager.ensure_session().await.unwrap_err();
        assert!(matches!(err, PaladinsError::Api { message } if message.contains("Maximum")));
        assert!(!manager.store().is_active());

        fs::remove_dir_all(dir).unwrap();
    }
}
