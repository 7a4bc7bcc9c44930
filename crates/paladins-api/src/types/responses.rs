/*
[INPUT]:  Paladins API JSON payloads
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - typed envelopes for the few responses the client reads
[UPDATE]: When API schema changes or new typed responses are added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::ProfileState;

/// Payload returned by `createsession`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    #[serde(default)]
    pub ret_msg: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Payload returned by `getdataused`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataUsage {
    #[serde(rename = "Active_Sessions")]
    pub active_sessions: u32,
    #[serde(rename = "Concurrent_Sessions")]
    pub concurrent_sessions: u32,
    #[serde(rename = "Request_Limit_Daily")]
    pub request_limit_daily: u32,
    #[serde(rename = "Session_Cap")]
    pub session_cap: u32,
    #[serde(rename = "Session_Time_Limit")]
    pub session_time_limit: u32,
    #[serde(rename = "Total_Requests_Today")]
    pub total_requests_today: u32,
    #[serde(rename = "Total_Sessions_Today")]
    pub total_sessions_today: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    #[serde(rename = "Match", default)]
    pub match_id: Option<u64>,
    #[serde(default)]
    pub match_queue_id: Option<u32>,
    #[serde(default)]
    pub personal_status_message: Option<String>,
    pub status: ProfileState,
    #[serde(default)]
    pub status_string: Option<String>,
}

/// Row returned by the player id lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerIdInfo {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(with = "id_or_string")]
    pub player_id: u64,
    #[serde(default)]
    pub portal: Option<String>,
    #[serde(default, deserialize_with = "id_or_string::deserialize_opt")]
    pub portal_id: Option<u64>,
    #[serde(default)]
    pub privacy_flag: Option<String>,
}

impl PlayerIdInfo {
    pub fn is_private(&self) -> bool {
        self.privacy_flag.as_deref() == Some("y")
    }
}

/// Row returned by `searchplayers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPlayer {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(default)]
    pub hz_player_name: Option<String>,
    #[serde(with = "id_or_string")]
    pub player_id: u64,
    #[serde(default, deserialize_with = "id_or_string::deserialize_opt")]
    pub portal_id: Option<u64>,
    #[serde(default)]
    pub privacy_flag: Option<String>,
}

/// Minimal champion row, enough for id lookups and enum export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionSummary {
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Roles", default)]
    pub roles: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The service encodes some ids as strings and others as numbers.
mod id_or_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    fn parse<E: Error>(raw: Raw) -> Result<u64, E> {
        match raw {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(E::custom),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        parse(Raw::deserialize(deserializer)?)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(raw) => parse(raw).map(Some),
        }
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_info_accepts_string_ids() {
        let row: PlayerIdInfo = serde_json::from_value(serde_json::json!({
            "Name": "Bob",
            "player_id": 123,
            "portal": "Steam",
            "portal_id": "5",
            "privacy_flag": "n",
            "ret_msg": null
        }))
        .unwrap();
        assert_eq!(row.player_id, 123);
        assert_eq!(row.portal_id, Some(5));
        assert!(!row.is_private());
    }

    #[test]
    fn test_search_player_string_player_id() {
        let row: SearchPlayer = serde_json::from_value(serde_json::json!({
            "Name": "Bob",
            "hz_player_name": null,
            "player_id": "777",
            "portal_id": "",
            "privacy_flag": "y"
        }))
        .unwrap();
        assert_eq!(row.player_id, 777);
        assert_eq!(row.portal_id, None);
    }

    #[test]
    fn test_player_status_parses_profile_state() {
        let status: PlayerStatus = serde_json::from_value(serde_json::json!({
            "Match": 0,
            "match_queue_id": 0,
            "personal_status_message": null,
            "ret_msg": null,
            "status": 4,
            "status_string": "Online"
        }))
        .unwrap();
        assert_eq!(status.status, ProfileState::Online);
    }

    #[test]
    fn test_champion_summary_keeps_extra_fields() {
        let champ: ChampionSummary = serde_json::from_value(serde_json::json!({
            "id": 2205,
            "Name": "Androxus",
            "Roles": "Paladins Flanker",
            "Health": 2000
        }))
        .unwrap();
        assert_eq!(champ.id, 2205);
        assert_eq!(champ.extra.get("Health"), Some(&serde_json::json!(2000)));
    }
}
