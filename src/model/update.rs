//! Typed view of a `CHANNEL_UPDATE` gateway payload.
//!
//! The transport hands each payload over as a `serde_json::Value`; this module turns
//! it into a [`ChannelUpdate`]. The payload may be a partial snapshot, so every
//! kind-specific attribute is optional. How an absent attribute is interpreted is
//! decided by the handler for that attribute, not here.

use serde::{Deserialize, Deserializer};
use serenity::all::{ChannelId, Permissions};

use crate::model::permissions::OverwrittenPermissions;
use crate::model::snowflake::{PermissionMask, Snowflake};

/// Discriminator selecting which kind of channel an update describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Private,
    Voice,
    Group,
    Category,
    /// Any channel type this client does not track (news, stage, threads...).
    Unknown(i64),
}

impl From<i64> for ChannelKind {
    fn from(value: i64) -> Self {
        match value {
            0 => ChannelKind::Text,
            1 => ChannelKind::Private,
            2 => ChannelKind::Voice,
            3 => ChannelKind::Group,
            4 => ChannelKind::Category,
            other => ChannelKind::Unknown(other),
        }
    }
}

impl<'de> Deserialize<'de> for ChannelKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(ChannelKind::from)
    }
}

/// Participant kind an overwrite entry targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverwriteType {
    Role,
    Member,
    /// Unrecognized kind, kept verbatim for error reporting.
    Other(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOverwriteType {
    Name(String),
    Code(u64),
}

impl<'de> Deserialize<'de> for OverwriteType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawOverwriteType::deserialize(deserializer)? {
            RawOverwriteType::Name(name) => match name.as_str() {
                "role" => OverwriteType::Role,
                "member" => OverwriteType::Member,
                _ => OverwriteType::Other(name),
            },
            RawOverwriteType::Code(0) => OverwriteType::Role,
            RawOverwriteType::Code(1) => OverwriteType::Member,
            RawOverwriteType::Code(code) => OverwriteType::Other(code.to_string()),
        })
    }
}

/// One entry of the incoming `permission_overwrites` list.
#[derive(Debug, Clone, Deserialize)]
pub struct OverwriteEntry {
    /// Role or user id, depending on `kind`.
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    #[serde(default)]
    pub allow: PermissionMask,
    #[serde(default)]
    pub deny: PermissionMask,
}

impl OverwriteEntry {
    /// Overwrite value described by this entry's masks.
    pub fn permissions(&self) -> OverwrittenPermissions {
        OverwrittenPermissions::new(Permissions::from(self.allow), Permissions::from(self.deny))
    }
}

/// Full or partial snapshot of one channel.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelUpdate {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    pub name: Option<String>,
    pub position: Option<i32>,
    pub topic: Option<String>,
    pub nsfw: Option<bool>,
    pub bitrate: Option<u32>,
    pub user_limit: Option<u32>,
    pub parent_id: Option<Snowflake>,
    pub permission_overwrites: Option<Vec<OverwriteEntry>>,
}

impl ChannelUpdate {
    /// Parses a raw gateway payload.
    ///
    /// # Returns
    /// - `Ok(ChannelUpdate)` - The payload has an id and a numeric type
    /// - `Err(serde_json::Error)` - Required fields are missing or malformed
    pub fn from_value(packet: &serde_json::Value) -> Result<Self, serde_json::Error> {
        ChannelUpdate::deserialize(packet)
    }

    pub fn channel_id(&self) -> ChannelId {
        self.id.into()
    }

    /// Incoming topic, with a missing or null topic read as empty.
    pub fn topic_or_empty(&self) -> String {
        self.topic.clone().unwrap_or_default()
    }

    /// Incoming parent category id, `None` when absent or null.
    pub fn parent_channel_id(&self) -> Option<ChannelId> {
        self.parent_id.map(ChannelId::from)
    }

    /// Incoming overwrite list, with a missing or null list read as empty.
    pub fn overwrites(&self) -> &[OverwriteEntry] {
        self.permission_overwrites.as_deref().unwrap_or_default()
    }
}
