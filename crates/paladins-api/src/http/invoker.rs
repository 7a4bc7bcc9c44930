/*
[INPUT]:  Method name, positional arguments, result shape
[OUTPUT]: Classified, shaped (and optionally typed) API results
[POS]:    HTTP layer - signed call orchestration with bounded session retry
[UPDATE]: When changing retry policy or adding result shapes
*/

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::http::executor::{Envelope, classify};
use crate::http::url_builder::UrlArgs;
use crate::http::{PaladinsClient, PaladinsError, Result};

/// Session renewals allowed within one call
pub const MAX_SESSION_RETRIES: u32 = 1;

/// How a successful body is handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    /// The decoded body as-is
    #[default]
    Raw,
    /// First array element; an empty array is `NotFound`
    First,
    /// Object of `key value -> rows`, keys sorted, rows in original order
    GroupBy(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallOptions {
    pub shape: Shape,
}

impl CallOptions {
    pub fn raw() -> Self {
        Self { shape: Shape::Raw }
    }

    pub fn first() -> Self {
        Self { shape: Shape::First }
    }

    pub fn group_by(key: &'static str) -> Self {
        Self {
            shape: Shape::GroupBy(key),
        }
    }
}

impl PaladinsClient {
    /// Execute a signed call to `method`.
    ///
    /// A session-expired envelope triggers one renewal and one retry; a
    /// second one fails with [`PaladinsError::SessionRejected`].
    pub async fn call_with(
        &self,
        method: &str,
        args: &UrlArgs,
        options: CallOptions,
    ) -> Result<Value> {
        let mut session = self.ensure_session().await?;
        let mut retries = 0;

        loop {
            let body = self.send_signed(method, &session, args).await?;

            match classify(&body) {
                Envelope::Success => {
                    debug!(method, retries, "call succeeded");
                    return shape(method, body, options.shape);
                }
                Envelope::SessionExpired if retries < MAX_SESSION_RETRIES => {
                    retries += 1;
                    warn!(method, retries, "session rejected, renewing");
                    session = self.sessions().renew_session(&session).await?;
                }
                Envelope::SessionExpired => {
                    warn!(method, retries, "session rejected after renewal");
                    return Err(PaladinsError::SessionRejected {
                        attempts: retries + 1,
                    });
                }
                Envelope::Failure(failure) => {
                    debug!(method, failure = ?failure, "call failed");
                    return Err(failure.into());
                }
            }
        }
    }

    /// Raw call deserialized into `T`
    pub async fn call<T: DeserializeOwned>(&self, method: &str, args: &UrlArgs) -> Result<T> {
        let value = self.call_with(method, args, CallOptions::raw()).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// First row deserialized into `T`
    pub async fn call_first<T: DeserializeOwned>(
        &self,
        method: &str,
        args: &UrlArgs,
    ) -> Result<T> {
        let value = self.call_with(method, args, CallOptions::first()).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Rows grouped by the value of `key`
    pub async fn call_grouped<T: DeserializeOwned>(
        &self,
        method: &str,
        args: &UrlArgs,
        key: &'static str,
    ) -> Result<BTreeMap<String, Vec<T>>> {
        let value = self.call_with(method, args, CallOptions::group_by(key)).await?;
        Ok(serde_json::from_value(value)?)
    }
}

fn shape(method: &str, body: Value, shape: Shape) -> Result<Value> {
    match shape {
        Shape::Raw => Ok(body),
        Shape::First => match body {
            Value::Array(rows) => rows.into_iter().next().ok_or_else(|| PaladinsError::NotFound {
                method: method.to_string(),
            }),
            other => Ok(other),
        },
        Shape::GroupBy(key) => {
            let rows = match body {
                Value::Array(rows) => rows,
                Value::Null => Vec::new(),
                other => vec![other],
            };
            let grouped = group_rows(rows, key)?;
            Ok(Value::Object(
                grouped
                    .into_iter()
                    .map(|(k, rows)| (k, Value::Array(rows)))
                    .collect::<Map<String, Value>>(),
            ))
        }
    }
}

/// Group `rows` by the stringified value of `key`, keeping row order.
pub fn group_rows(rows: Vec<Value>, key: &str) -> Result<BTreeMap<String, Vec<Value>>> {
    let mut groups: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    for row in rows {
        let group = match row.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(PaladinsError::InvalidResponse(format!(
                    "row is missing grouping key '{key}'"
                )));
            }
        };
        groups.entry(group).or_default().push(row);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_rows_preserves_relative_order() {
        let rows = vec![
            json!({"Match": 10, "playerName": "a"}),
            json!({"Match": 20, "playerName": "b"}),
            json!({"Match": 10, "playerName": "c"}),
        ];
        let groups = group_rows(rows, "Match").unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups["10"],
            vec![
                json!({"Match": 10, "playerName": "a"}),
                json!({"Match": 10, "playerName": "c"})
            ]
        );
        assert_eq!(groups["20"], vec![json!({"Match": 20, "playerName": "b"})]);
    }

    #[test]
    fn test_group_rows_string_keys() {
        let rows = vec![json!({"Match": "10"}), json!({"Match": 10})];
        let groups = group_rows(rows, "Match").unwrap();
        assert_eq!(groups["10"].len(), 2);
    }

    #[test]
    fn test_group_rows_missing_key() {
        let err = group_rows(vec![json!({"other": 1})], "Match").unwrap_err();
        assert!(matches!(err, PaladinsError::InvalidResponse(_)));
    }

    #[test]
    fn test_shape_first_empty_is_not_found() {
        let err = shape("getplayer", json!([]), Shape::First).unwrap_err();
        assert!(matches!(err, PaladinsError::NotFound { method } if method == "getplayer"));
    }

    #[test]
    fn test_shape_first_unwraps() {
        let value = shape("getplayer", json!([{"Id": 1}, {"Id": 2}]), Shape::First).unwrap();
        assert_eq!(value, json!({"Id": 1}));

        let value = shape("getplayerstatus", json!({"status": 1}), Shape::First).unwrap();
        assert_eq!(value, json!({"status": 1}));
    }

    #[test]
    fn test_shape_group_by_builds_object() {
        let body = json!([{"Match": 10}, {"Match": 10}, {"Match": 20}]);
        let value = shape("getmatchdetailsbatch", body, Shape::GroupBy("Match")).unwrap();
        assert_eq!(
            value,
            json!({"10": [{"Match": 10}, {"Match": 10}], "20": [{"Match": 20}]})
        );
    }
}
