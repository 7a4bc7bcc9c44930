/*
[INPUT]:  Developer id, auth key, method name, UTC clock
[OUTPUT]: MD5 request signatures and 14-digit request timestamps
[POS]:    HTTP layer - request signing for every API call
[UPDATE]: When changing signing algorithm or timestamp format
*/

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Compute the signature for a single call.
///
/// Format: md5("{dev_id}{method}{auth_key}{timestamp}"), lowercase hex.
pub fn signature(dev_id: &str, method: &str, auth_key: &str, timestamp: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(dev_id.as_bytes());
    hasher.update(method.as_bytes());
    hasher.update(auth_key.as_bytes());
    hasher.update(timestamp.as_bytes());
    hex::encode(hasher.finalize())
}

/// Current UTC time as `YYYYMMDDHHmmss`
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Signs API calls with the developer credentials
#[derive(Clone)]
pub struct RequestSigner {
    dev_id: String,
    auth_key: String,
}

impl RequestSigner {
    /// Create a new request signer for the given developer credentials
    pub fn new(dev_id: impl Into<String>, auth_key: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            auth_key: auth_key.into(),
        }
    }

    pub fn dev_id(&self) -> &str {
        &self.dev_id
    }

    /// Sign `method` at `timestamp`
    pub fn sign(&self, method: &str, timestamp: &str) -> String {
        signature(&self.dev_id, method, &self.auth_key, timestamp)
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("dev_id", &self.dev_id)
            .field("auth_key", &"<redacted>")
            .finish()
    }
}
