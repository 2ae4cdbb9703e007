//! Domain models for the mirrored Discord state.
//!
//! Holds the cached entities (channels, servers, roles, users), the permission
//! overwrite values attached to server channels, the [`field::Field`] cells that make
//! per-field updates atomic, and the typed form of incoming channel update payloads.

pub mod channel;
pub mod field;
pub mod permissions;
pub mod server;
pub mod snowflake;
pub mod update;

pub use channel::{
    Channel, ChannelCategory, GroupChannel, PrivateChannel, ServerChannel, ServerChannelCore,
    ServerTextChannel, ServerVoiceChannel,
};
pub use field::{Change, Field};
pub use permissions::{OverwrittenPermissions, Overwrites};
pub use server::{Role, Server, User};
pub use snowflake::{PermissionMask, Snowflake};
pub use update::{ChannelKind, ChannelUpdate, OverwriteEntry, OverwriteType};
