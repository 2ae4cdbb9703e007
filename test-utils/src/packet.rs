//! Builders for raw `CHANNEL_UPDATE` payloads.
//!
//! Payloads are emitted in Discord's JSON encoding: snowflakes and permission masks
//! as strings, the channel type as an integer, overwrite types as `"role"` or
//! `"member"`. Only the attributes set on the builder are written, which makes it
//! easy to produce partial snapshots.

use serde_json::{json, Map, Value};

const TEXT: u8 = 0;
const PRIVATE: u8 = 1;
const VOICE: u8 = 2;
const GROUP: u8 = 3;
const CATEGORY: u8 = 4;

/// Builder for a single channel update payload.
///
/// # Example
///
/// ```rust
/// use test_utils::packet::ChannelPacketBuilder;
///
/// let packet = ChannelPacketBuilder::voice(30).bitrate(96000).no_parent().build();
///
/// assert_eq!(packet["bitrate"], 96000);
/// assert!(packet["parent_id"].is_null());
/// assert!(packet.get("name").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ChannelPacketBuilder {
    fields: Map<String, Value>,
    overwrites: Option<Vec<Value>>,
}

impl ChannelPacketBuilder {
    /// Starts a payload for channel `id` with the raw type discriminator `kind`.
    ///
    /// Use the named constructors for the tracked channel kinds; this one exists for
    /// payloads of types the client does not handle.
    pub fn with_type(id: u64, kind: u8) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!(id.to_string()));
        fields.insert("type".to_string(), json!(kind));
        Self {
            fields,
            overwrites: None,
        }
    }

    pub fn text(id: u64) -> Self {
        Self::with_type(id, TEXT)
    }

    pub fn private(id: u64) -> Self {
        Self::with_type(id, PRIVATE)
    }

    pub fn voice(id: u64) -> Self {
        Self::with_type(id, VOICE)
    }

    pub fn group(id: u64) -> Self {
        Self::with_type(id, GROUP)
    }

    pub fn category(id: u64) -> Self {
        Self::with_type(id, CATEGORY)
    }

    /// Sets the `guild_id` the payload claims to belong to.
    pub fn guild(self, guild_id: u64) -> Self {
        self.set("guild_id", json!(guild_id.to_string()))
    }

    pub fn name(self, name: &str) -> Self {
        self.set("name", json!(name))
    }

    pub fn position(self, position: i32) -> Self {
        self.set("position", json!(position))
    }

    pub fn topic(self, topic: &str) -> Self {
        self.set("topic", json!(topic))
    }

    /// Sends an explicit `null` topic.
    pub fn no_topic(self) -> Self {
        self.set("topic", Value::Null)
    }

    pub fn nsfw(self, nsfw: bool) -> Self {
        self.set("nsfw", json!(nsfw))
    }

    pub fn bitrate(self, bitrate: u32) -> Self {
        self.set("bitrate", json!(bitrate))
    }

    pub fn user_limit(self, user_limit: u32) -> Self {
        self.set("user_limit", json!(user_limit))
    }

    pub fn parent(self, parent_id: u64) -> Self {
        self.set("parent_id", json!(parent_id.to_string()))
    }

    /// Sends an explicit `null` parent id.
    pub fn no_parent(self) -> Self {
        self.set("parent_id", Value::Null)
    }

    /// Appends a role overwrite entry.
    ///
    /// # Arguments
    /// - `role_id` - Role the overwrite targets
    /// - `allow` - Raw allow mask
    /// - `deny` - Raw deny mask
    pub fn role_overwrite(self, role_id: u64, allow: u64, deny: u64) -> Self {
        self.overwrite(role_id, json!("role"), allow, deny)
    }

    /// Appends a member overwrite entry.
    pub fn member_overwrite(self, user_id: u64, allow: u64, deny: u64) -> Self {
        self.overwrite(user_id, json!("member"), allow, deny)
    }

    /// Appends an overwrite entry with an arbitrary type value.
    pub fn overwrite(mut self, id: u64, kind: Value, allow: u64, deny: u64) -> Self {
        self.overwrites.get_or_insert_with(Vec::new).push(json!({
            "id": id.to_string(),
            "type": kind,
            "allow": allow.to_string(),
            "deny": deny.to_string(),
        }));
        self
    }

    /// Sends an explicit, empty overwrite list.
    pub fn no_overwrites(mut self) -> Self {
        self.overwrites = Some(Vec::new());
        self
    }

    /// Sets an arbitrary top-level attribute.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Produces the payload.
    ///
    /// `permission_overwrites` is only present if an overwrite method was called.
    pub fn build(self) -> Value {
        let mut fields = self.fields;
        if let Some(overwrites) = self.overwrites {
            fields.insert("permission_overwrites".to_string(), Value::Array(overwrites));
        }
        Value::Object(fields)
    }
}
