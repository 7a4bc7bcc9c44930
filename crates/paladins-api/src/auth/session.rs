/*
[INPUT]:  createsession payloads and on-disk session records
[OUTPUT]: Session values and their persisted JSON form
[POS]:    Auth layer - session token data model
[UPDATE]: When the persisted record layout changes
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An issued session token with its issuance metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    /// `YYYYMMDDHHmmss` at which the session was created
    pub created_at: String,
    /// Full createsession payload
    pub raw: Value,
}

impl Session {
    pub fn new(token: impl Into<String>, created_at: impl Into<String>, raw: Value) -> Self {
        Self {
            token: token.into(),
            created_at: created_at.into(),
            raw,
        }
    }

    /// A session is usable as long as it carries a token
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty()
    }
}

/// On-disk layout: `{ "sessionId", "createdAt", "data" }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl SessionRecord {
    /// The session described by this record, if it holds a token
    pub fn session(&self) -> Option<Session> {
        let token = self.session_id.as_deref().filter(|t| !t.is_empty())?;
        Some(Session::new(
            token,
            self.created_at.clone().unwrap_or_default(),
            self.data.clone().unwrap_or(Value::Null),
        ))
    }
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            session_id: Some(session.token.clone()),
            created_at: Some(session.created_at.clone()),
            data: Some(session.raw.clone()),
        }
    }
}
