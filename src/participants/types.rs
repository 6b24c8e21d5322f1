//! Participant record types
//!
//! Field names mirror the camelCase wire format. Timestamps the server may
//! omit are optional; list-valued fields default to empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A participant of a meeting
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    /// Unique identifier of the participant
    pub id: String,
    /// Organization the participant belongs to
    pub org_id: String,
    /// Whether the participant is the meeting host
    pub host: bool,
    /// Whether the participant is a cohost
    pub co_host: bool,
    /// Whether the participant moderates the space the meeting belongs to
    pub space_moderator: bool,
    /// Email address
    pub email: String,
    /// Display name
    pub display_name: String,
    /// Whether the participant was invited rather than joining ad hoc
    pub invitee: bool,
    /// Whether the participant is currently muted
    pub muted: bool,
    /// Start time of the meeting instance the participant joined
    pub meeting_start_time: Option<DateTime<Utc>>,
    /// Video state ("on", "off")
    pub video: String,
    /// Participant state ("joined", "lobby", "end")
    pub state: String,
    /// Breakout session the participant is currently in, if any
    pub breakout_session_id: String,
    /// When the participant joined
    pub joined_time: Option<DateTime<Utc>>,
    /// When the participant left
    pub left_time: Option<DateTime<Utc>>,
    /// Site the meeting was held on
    pub site_url: String,
    /// Meeting this participant belongs to
    pub meeting_id: String,
    /// Email address of the meeting host
    pub host_email: String,
    /// Devices the participant joined with
    pub devices: Vec<ParticipantDevice>,
    /// Breakout sessions the participant attended
    pub breakout_sessions_attended: Vec<BreakoutSessionAttended>,
    /// Source the participant record originated from
    pub source_id: String,
}

/// A device a participant joined a meeting with
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDevice {
    /// Correlates this device across sessions
    pub correlation_id: String,
    /// Device type ("desktop", "mobile", "sip", ...)
    pub device_type: String,
    /// Audio channel type ("pstn", "voip")
    pub audio_type: String,
    /// When this device joined
    pub joined_time: Option<DateTime<Utc>>,
    /// When this device left
    pub left_time: Option<DateTime<Utc>>,
    /// Time connected, in seconds
    pub duration_second: i64,
    /// Call type for dial-in/dial-out devices
    pub call_type: String,
    /// Phone number for dial-in/dial-out devices
    pub phone_number: String,
}

/// A breakout session a participant attended
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakoutSessionAttended {
    /// Unique identifier of the breakout session
    pub id: String,
    /// Name of the breakout session
    pub name: String,
    /// When the participant joined the session
    pub joined_time: Option<DateTime<Utc>>,
    /// When the participant left the session
    pub left_time: Option<DateTime<Utc>>,
}

/// Wire shape of one listing page body
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ParticipantPage {
    #[serde(default)]
    pub items: Vec<Participant>,
}
