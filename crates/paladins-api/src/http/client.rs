/*
[INPUT]:  Resolved client configuration (credentials, base URL, timeouts, session path)
[OUTPUT]: Configured reqwest client bound to a session manager
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::auth::{SessionManager, SessionStore};
use crate::config::ClientConfig;
use crate::http::executor::execute;
use crate::http::signature::{RequestSigner, timestamp};
use crate::http::url_builder::{SignedRequest, UrlArgs};
use crate::http::Result;
use crate::types::Language;

/// Main HTTP client for the Paladins API.
///
/// Cloning is cheap; clones share the same session.
#[derive(Debug, Clone)]
pub struct PaladinsClient {
    http_client: Client,
    base_url: String,
    signer: RequestSigner,
    language: Language,
    sessions: Arc<SessionManager>,
}

impl PaladinsClient {
    /// Create a new client with default configuration
    pub fn new(dev_id: impl Into<String>, auth_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(dev_id, auth_key))
    }

    /// Create a new client with custom configuration.
    ///
    /// Loads (or initialises) the session record at `config.session_path`.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(&config.base_url)?
            .as_str()
            .trim_end_matches('/')
            .to_string();
        let signer = RequestSigner::new(config.dev_id, config.auth_key);
        let store = SessionStore::open(&config.session_path)?;
        let sessions =
            SessionManager::new(store, http_client.clone(), base_url.clone(), signer.clone());

        Ok(Self {
            http_client,
            base_url,
            signer,
            language: config.language,
            sessions: Arc::new(sessions),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default language for localized endpoints
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Ensure a session exists and return its token
    pub async fn ensure_session(&self) -> Result<String> {
        self.sessions.ensure_session().await
    }

    /// Build the URL for `method` signed at `timestamp`
    pub(crate) fn signed_url(
        &self,
        method: &str,
        session: &str,
        timestamp: &str,
        args: &UrlArgs,
    ) -> String {
        let signature = self.signer.sign(method, timestamp);
        SignedRequest {
            method,
            dev_id: self.signer.dev_id(),
            signature: &signature,
            session: Some(session),
            timestamp,
            args,
        }
        .to_url(&self.base_url)
    }

    /// One signed round trip, without classification or retry
    pub(crate) async fn send_signed(
        &self,
        method: &str,
        session: &str,
        args: &UrlArgs,
    ) -> Result<Value> {
        let ts = timestamp();
        let url = self.signed_url(method, session, &ts, args);
        debug!(method, "sending signed request");
        execute(&self.http_client, &url).await
    }
}
