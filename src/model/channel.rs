//! Cached channel entities.
//!
//! Server channels (text, voice and categories) share a name, a position and the
//! permission overwrite maps through [`ServerChannelCore`], and expose them through
//! the [`ServerChannel`] trait so handlers never branch on the concrete channel kind
//! to reach them. Group and private channels live outside any server.
//!
//! Entities are shared through `Arc` by the cache; all mutable state sits in
//! [`Field`] cells or concurrent maps, so a `&` reference is enough to update them.

use std::sync::Arc;

use parking_lot::RwLock;
use serenity::all::{ChannelId, GuildId, RoleId, UserId};

use crate::model::field::Field;
use crate::model::permissions::{OverwrittenPermissions, Overwrites};

/// State every server channel carries regardless of its kind.
#[derive(Debug)]
pub struct ServerChannelCore {
    pub(crate) name: Field<String>,
    pub(crate) position: Field<i32>,
    pub(crate) overwrites: Overwrites,
}

impl ServerChannelCore {
    pub fn new(name: impl Into<String>, position: i32) -> Self {
        Self {
            name: Field::new(name.into()),
            position: Field::new(position),
            overwrites: Overwrites::new(),
        }
    }
}

/// Capability shared by every channel that belongs to a server.
pub trait ServerChannel: Send + Sync {
    fn id(&self) -> ChannelId;

    /// Server owning this channel.
    fn server_id(&self) -> GuildId;

    fn core(&self) -> &ServerChannelCore;

    fn name(&self) -> String {
        self.core().name.get()
    }

    /// Raw position as sent by Discord; not necessarily contiguous.
    fn position(&self) -> i32 {
        self.core().position.get()
    }

    fn overwrites(&self) -> &Overwrites {
        &self.core().overwrites
    }

    /// Overwrite for `role` in this channel, [`OverwrittenPermissions::EMPTY`] if none.
    fn role_overwrite(&self, role: RoleId) -> OverwrittenPermissions {
        self.overwrites().role(role)
    }

    /// Overwrite for `user` in this channel, [`OverwrittenPermissions::EMPTY`] if none.
    fn member_overwrite(&self, user: UserId) -> OverwrittenPermissions {
        self.overwrites().member(user)
    }

    /// True if `role` has an overwrite entry, even one with empty masks.
    fn has_role_overwrite(&self, role: RoleId) -> bool {
        self.overwrites().has_role(role)
    }

    /// True if `user` has an overwrite entry, even one with empty masks.
    fn has_member_overwrite(&self, user: UserId) -> bool {
        self.overwrites().has_member(user)
    }
}

/// Text channel inside a server.
#[derive(Debug)]
pub struct ServerTextChannel {
    id: ChannelId,
    server_id: GuildId,
    core: ServerChannelCore,
    pub(crate) topic: Field<String>,
    pub(crate) nsfw: Field<bool>,
    pub(crate) parent_id: Field<Option<ChannelId>>,
}

impl ServerTextChannel {
    pub fn new(id: ChannelId, server_id: GuildId, name: impl Into<String>, position: i32) -> Self {
        Self {
            id,
            server_id,
            core: ServerChannelCore::new(name, position),
            topic: Field::new(String::new()),
            nsfw: Field::new(false),
            parent_id: Field::new(None),
        }
    }

    pub fn with_topic(self, topic: impl Into<String>) -> Self {
        self.topic.replace_if_changed(topic.into());
        self
    }

    pub fn with_nsfw(self, nsfw: bool) -> Self {
        self.nsfw.replace_if_changed(nsfw);
        self
    }

    pub fn with_parent(self, parent_id: ChannelId) -> Self {
        self.parent_id.replace_if_changed(Some(parent_id));
        self
    }

    /// Topic, empty when the channel has none.
    pub fn topic(&self) -> String {
        self.topic.get()
    }

    pub fn is_nsfw(&self) -> bool {
        self.nsfw.get()
    }

    /// Category this channel is filed under, if any.
    pub fn parent_id(&self) -> Option<ChannelId> {
        self.parent_id.get()
    }
}

impl ServerChannel for ServerTextChannel {
    fn id(&self) -> ChannelId {
        self.id
    }

    fn server_id(&self) -> GuildId {
        self.server_id
    }

    fn core(&self) -> &ServerChannelCore {
        &self.core
    }
}

/// Voice channel inside a server.
#[derive(Debug)]
pub struct ServerVoiceChannel {
    id: ChannelId,
    server_id: GuildId,
    core: ServerChannelCore,
    pub(crate) bitrate: Field<u32>,
    /// 0 means unlimited.
    pub(crate) user_limit: Field<u32>,
    pub(crate) parent_id: Field<Option<ChannelId>>,
}

impl ServerVoiceChannel {
    pub fn new(
        id: ChannelId,
        server_id: GuildId,
        name: impl Into<String>,
        position: i32,
        bitrate: u32,
    ) -> Self {
        Self {
            id,
            server_id,
            core: ServerChannelCore::new(name, position),
            bitrate: Field::new(bitrate),
            user_limit: Field::new(0),
            parent_id: Field::new(None),
        }
    }

    pub fn with_user_limit(self, user_limit: u32) -> Self {
        self.user_limit.replace_if_changed(user_limit);
        self
    }

    pub fn with_parent(self, parent_id: ChannelId) -> Self {
        self.parent_id.replace_if_changed(Some(parent_id));
        self
    }

    /// Bitrate in bits per second.
    pub fn bitrate(&self) -> u32 {
        self.bitrate.get()
    }

    /// Maximum number of connected users, `None` when unlimited.
    pub fn user_limit(&self) -> Option<u32> {
        Some(self.user_limit.get()).filter(|limit| *limit != 0)
    }

    pub fn parent_id(&self) -> Option<ChannelId> {
        self.parent_id.get()
    }
}

impl ServerChannel for ServerVoiceChannel {
    fn id(&self) -> ChannelId {
        self.id
    }

    fn server_id(&self) -> GuildId {
        self.server_id
    }

    fn core(&self) -> &ServerChannelCore {
        &self.core
    }
}

/// Category grouping other server channels.
#[derive(Debug)]
pub struct ChannelCategory {
    id: ChannelId,
    server_id: GuildId,
    core: ServerChannelCore,
    pub(crate) nsfw: Field<bool>,
}

impl ChannelCategory {
    pub fn new(id: ChannelId, server_id: GuildId, name: impl Into<String>, position: i32) -> Self {
        Self {
            id,
            server_id,
            core: ServerChannelCore::new(name, position),
            nsfw: Field::new(false),
        }
    }

    pub fn with_nsfw(self, nsfw: bool) -> Self {
        self.nsfw.replace_if_changed(nsfw);
        self
    }

    pub fn is_nsfw(&self) -> bool {
        self.nsfw.get()
    }
}

impl ServerChannel for ChannelCategory {
    fn id(&self) -> ChannelId {
        self.id
    }

    fn server_id(&self) -> GuildId {
        self.server_id
    }

    fn core(&self) -> &ServerChannelCore {
        &self.core
    }
}

/// Group direct-message channel with several recipients.
#[derive(Debug)]
pub struct GroupChannel {
    id: ChannelId,
    pub(crate) name: Field<String>,
    members: RwLock<Vec<UserId>>,
}

impl GroupChannel {
    pub fn new(id: ChannelId, name: impl Into<String>, members: Vec<UserId>) -> Self {
        Self {
            id,
            name: Field::new(name.into()),
            members: RwLock::new(members),
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn name(&self) -> String {
        self.name.get()
    }

    /// Current recipients, in join order.
    pub fn members(&self) -> Vec<UserId> {
        self.members.read().clone()
    }

    /// Adds a recipient; returns false if they were already a member.
    pub fn add_member(&self, user: UserId) -> bool {
        let mut members = self.members.write();
        if members.contains(&user) {
            return false;
        }
        members.push(user);
        true
    }

    /// Removes a recipient; returns false if they were not a member.
    pub fn remove_member(&self, user: UserId) -> bool {
        let mut members = self.members.write();
        let before = members.len();
        members.retain(|member| *member != user);
        members.len() != before
    }
}

/// One-to-one direct-message channel.
#[derive(Debug)]
pub struct PrivateChannel {
    id: ChannelId,
    recipient: UserId,
}

impl PrivateChannel {
    pub fn new(id: ChannelId, recipient: UserId) -> Self {
        Self { id, recipient }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn recipient(&self) -> UserId {
        self.recipient
    }
}

/// Any cached channel, shared by reference.
#[derive(Debug, Clone)]
pub enum Channel {
    Text(Arc<ServerTextChannel>),
    Voice(Arc<ServerVoiceChannel>),
    Category(Arc<ChannelCategory>),
    Group(Arc<GroupChannel>),
    Private(Arc<PrivateChannel>),
}

impl Channel {
    pub fn id(&self) -> ChannelId {
        match self {
            Channel::Text(channel) => channel.id(),
            Channel::Voice(channel) => channel.id(),
            Channel::Category(channel) => channel.id(),
            Channel::Group(channel) => channel.id(),
            Channel::Private(channel) => channel.id(),
        }
    }

    /// Server-channel view of this channel, `None` for group and private channels.
    pub fn as_server_channel(&self) -> Option<&dyn ServerChannel> {
        match self {
            Channel::Text(channel) => Some(channel.as_ref()),
            Channel::Voice(channel) => Some(channel.as_ref()),
            Channel::Category(channel) => Some(channel.as_ref()),
            Channel::Group(_) | Channel::Private(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Arc<ServerTextChannel>> {
        match self {
            Channel::Text(channel) => Some(channel),
            _ => None,
        }
    }

    pub fn as_voice(&self) -> Option<&Arc<ServerVoiceChannel>> {
        match self {
            Channel::Voice(channel) => Some(channel),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&Arc<ChannelCategory>> {
        match self {
            Channel::Category(channel) => Some(channel),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Arc<GroupChannel>> {
        match self {
            Channel::Group(channel) => Some(channel),
            _ => None,
        }
    }

    pub fn as_private(&self) -> Option<&Arc<PrivateChannel>> {
        match self {
            Channel::Private(channel) => Some(channel),
            _ => None,
        }
    }

    /// True if both values refer to the same cached entity.
    pub fn same_entity(&self, other: &Channel) -> bool {
        match (self, other) {
            (Channel::Text(a), Channel::Text(b)) => Arc::ptr_eq(a, b),
            (Channel::Voice(a), Channel::Voice(b)) => Arc::ptr_eq(a, b),
            (Channel::Category(a), Channel::Category(b)) => Arc::ptr_eq(a, b),
            (Channel::Group(a), Channel::Group(b)) => Arc::ptr_eq(a, b),
            (Channel::Private(a), Channel::Private(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<ServerTextChannel> for Channel {
    fn from(channel: ServerTextChannel) -> Self {
        Channel::Text(Arc::new(channel))
    }
}

impl From<ServerVoiceChannel> for Channel {
    fn from(channel: ServerVoiceChannel) -> Self {
        Channel::Voice(Arc::new(channel))
    }
}

impl From<ChannelCategory> for Channel {
    fn from(channel: ChannelCategory) -> Self {
        Channel::Category(Arc::new(channel))
    }
}

impl From<GroupChannel> for Channel {
    fn from(channel: GroupChannel) -> Self {
        Channel::Group(Arc::new(channel))
    }
}

impl From<PrivateChannel> for Channel {
    fn from(channel: PrivateChannel) -> Self {
        Channel::Private(Arc::new(channel))
    }
}
