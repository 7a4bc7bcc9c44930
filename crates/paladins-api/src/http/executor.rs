/*
[INPUT]:  Fully signed request URLs
[OUTPUT]: Decoded JSON bodies and their ret_msg classification
[POS]:    HTTP layer - network execution and envelope classification
[UPDATE]: When the service changes its error conventions
*/

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::http::{PaladinsError, Result};

const SESSION_EXPIRED_MSG: &str = "invalid session id.";
const PRIVACY_FLAG_MSG: &str = "player privacy flag";
const DEVELOPER_ACCESS_MSG: &str = "exception while validating developer access";
const MAX_ERROR_BODY: usize = 512;

/// Outcome of inspecting a decoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Success,
    /// The session token was rejected and must be renewed
    SessionExpired,
    Failure(DomainFailure),
}

/// A non-null `ret_msg` other than session expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainFailure {
    PrivateProfile(String),
    UnauthorizedDeveloper(String),
    Other(String),
}

impl From<DomainFailure> for PaladinsError {
    fn from(failure: DomainFailure) -> Self {
        match failure {
            DomainFailure::PrivateProfile(message) => PaladinsError::PrivateProfile { message },
            DomainFailure::UnauthorizedDeveloper(message) => {
                PaladinsError::UnauthorizedDeveloper { message }
            }
            DomainFailure::Other(message) => PaladinsError::Api { message },
        }
    }
}

/// GET `url` and decode the body as JSON.
///
/// A non-2xx response is only passed on when its body is a JSON envelope
/// carrying a `ret_msg`; otherwise it is a transport failure.
pub async fn execute(http: &Client, url: &str) -> Result<Value> {
    let response = http.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "response received");

    if !status.is_success() {
        return match serde_json::from_str::<Value>(&body) {
            Ok(value) if ret_msg(&value).is_some() => Ok(value),
            _ => Err(PaladinsError::http_status(status, truncate(body))),
        };
    }

    Ok(serde_json::from_str(&body)?)
}

/// `ret_msg` of the first element (arrays) or of the object itself.
///
/// Later array elements are not inspected.
pub fn ret_msg(body: &Value) -> Option<String> {
    let first = match body {
        Value::Array(rows) => rows.first()?,
        other => other,
    };

    match first.get("ret_msg")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

pub fn classify(body: &Value) -> Envelope {
    let Some(message) = ret_msg(body) else {
        return Envelope::Success;
    };

    let lowered = message.trim().to_lowercase();
    if lowered == SESSION_EXPIRED_MSG {
        Envelope::SessionExpired
    } else if lowered.contains(PRIVACY_FLAG_MSG) {
        Envelope::Failure(DomainFailure::PrivateProfile(message))
    } else if lowered.contains(DEVELOPER_ACCESS_MSG) {
        Envelope::Failure(DomainFailure::UnauthorizedDeveloper(message))
    } else {
        Envelope::Failure(DomainFailure::Other(message))
    }
}

/// Whether a createsession `ret_msg` rejects the developer credentials
pub fn is_developer_rejection(message: &str) -> bool {
    message.to_lowercase().contains(DEVELOPER_ACCESS_MSG)
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}
