//! Roster records in, member snapshots out
//!
//! These are the shapes exchanged with the data-fetch and rendering layers.

use serde::{Deserialize, Serialize};

/// One roster entry as supplied by the member data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub username: String,
    pub photo_url: String,
    #[serde(default)]
    pub message: String,
}

impl Member {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        photo_url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            photo_url: photo_url.into(),
            message: message.into(),
        }
    }
}

/// Public view of a member, consumed by rendering and message editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSnapshot {
    pub id: String,
    pub username: String,
    pub photo_url: String,
    pub message: String,
    pub paused: bool,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub show_username: bool,
    pub show_message: bool,
}

/// Parse a JSON array of roster entries
pub fn parse_roster(json: &str) -> serde_json::Result<Vec<Member>> {
    serde_json::from_str(json)
}
