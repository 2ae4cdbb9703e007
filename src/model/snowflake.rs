//! Wire-level Discord identifiers and permission masks.
//!
//! Discord sends snowflakes and permission bit sets as JSON strings, while older
//! gateway versions (and hand-built payloads) use plain integers. Both encodings are
//! accepted here and converted into serenity's typed ids at the model boundary.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serenity::all::{ChannelId, GuildId, Permissions, RoleId, UserId};

/// Non-zero Discord identifier as received on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Creates a snowflake from a raw value, rejecting zero.
    pub fn new(value: u64) -> Option<Self> {
        (value != 0).then_some(Self(value))
    }

    /// Raw integer value of the identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Snowflake> for ChannelId {
    fn from(value: Snowflake) -> Self {
        ChannelId::new(value.0)
    }
}

impl From<Snowflake> for GuildId {
    fn from(value: Snowflake) -> Self {
        GuildId::new(value.0)
    }
}

impl From<Snowflake> for RoleId {
    fn from(value: Snowflake) -> Self {
        RoleId::new(value.0)
    }
}

impl From<Snowflake> for UserId {
    fn from(value: Snowflake) -> Self {
        UserId::new(value.0)
    }
}

/// Visitor accepting an unsigned integer either as a JSON number or a decimal string.
struct StrOrU64Visitor;

impl<'de> Visitor<'de> for StrOrU64Visitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer or a string containing one")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
        u64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
        value
            .parse::<u64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = deserializer.deserialize_any(StrOrU64Visitor)?;
        Snowflake::new(raw).ok_or_else(|| de::Error::custom("snowflake must be non-zero"))
    }
}

/// Permission bit set as received on the wire.
///
/// Bits serenity has no flag for are kept, so masks compare exactly as sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionMask(pub u64);

impl From<PermissionMask> for Permissions {
    fn from(value: PermissionMask) -> Self {
        Permissions::from_bits_retain(value.0)
    }
}

impl<'de> Deserialize<'de> for PermissionMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StrOrU64Visitor).map(PermissionMask)
    }
}

#[cfg(test)]
mod test;
