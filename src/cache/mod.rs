//! In-memory mirror of the server-owned entities.
//!
//! The cache is the lookup side of the synchronization engine: update handlers
//! resolve channels, categories, roles and users through it, and application code
//! reads current state from the same shared entities. All maps are concurrent, so a
//! `Cache` is shared behind an `Arc` without further locking.

use std::sync::Arc;

use dashmap::DashMap;
use serenity::all::{ChannelId, GuildId, RoleId, UserId};

use crate::model::{
    Channel, ChannelCategory, GroupChannel, PrivateChannel, Role, Server, ServerChannel,
    ServerTextChannel, ServerVoiceChannel, User,
};

/// Cached servers, roles, users and channels, keyed by id.
#[derive(Debug, Default)]
pub struct Cache {
    servers: DashMap<GuildId, Arc<Server>>,
    roles: DashMap<RoleId, Arc<Role>>,
    users: DashMap<UserId, Arc<User>>,
    channels: DashMap<ChannelId, Channel>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a server, returning the shared handle.
    pub fn insert_server(&self, server: Server) -> Arc<Server> {
        let server = Arc::new(server);
        self.servers.insert(server.id, server.clone());
        server
    }

    /// Inserts or replaces a role, returning the shared handle.
    pub fn insert_role(&self, role: Role) -> Arc<Role> {
        let role = Arc::new(role);
        self.roles.insert(role.id, role.clone());
        role
    }

    /// Inserts or replaces a user, returning the shared handle.
    pub fn insert_user(&self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.users.insert(user.id, user.clone());
        user
    }

    /// Inserts or replaces a channel of any kind, returning the shared handle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use channel_sync::cache::Cache;
    /// use channel_sync::model::ServerTextChannel;
    /// use serenity::all::{ChannelId, GuildId};
    ///
    /// let cache = Cache::new();
    /// let channel = cache.insert_channel(ServerTextChannel::new(
    ///     ChannelId::new(10),
    ///     GuildId::new(1),
    ///     "general",
    ///     0,
    /// ));
    /// assert!(cache.text_channel(ChannelId::new(10)).is_some());
    /// assert_eq!(channel.id(), ChannelId::new(10));
    /// ```
    pub fn insert_channel(&self, channel: impl Into<Channel>) -> Channel {
        let channel = channel.into();
        self.channels.insert(channel.id(), channel.clone());
        channel
    }

    pub fn remove_server(&self, id: GuildId) -> Option<Arc<Server>> {
        self.servers.remove(&id).map(|(_, server)| server)
    }

    pub fn remove_role(&self, id: RoleId) -> Option<Arc<Role>> {
        self.roles.remove(&id).map(|(_, role)| role)
    }

    pub fn remove_user(&self, id: UserId) -> Option<Arc<User>> {
        self.users.remove(&id).map(|(_, user)| user)
    }

    pub fn remove_channel(&self, id: ChannelId) -> Option<Channel> {
        self.channels.remove(&id).map(|(_, channel)| channel)
    }

    pub fn server(&self, id: GuildId) -> Option<Arc<Server>> {
        self.servers.get(&id).map(|entry| entry.value().clone())
    }

    pub fn role(&self, id: RoleId) -> Option<Arc<Role>> {
        self.roles.get(&id).map(|entry| entry.value().clone())
    }

    pub fn user(&self, id: UserId) -> Option<Arc<User>> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    pub fn channel(&self, id: ChannelId) -> Option<Channel> {
        self.channels.get(&id).map(|entry| entry.value().clone())
    }

    /// Any server channel (text, voice or category) with the given id.
    pub fn server_channel(&self, id: ChannelId) -> Option<Arc<dyn ServerChannel>> {
        shared_server_channel(&self.channel(id)?)
    }

    pub fn text_channel(&self, id: ChannelId) -> Option<Arc<ServerTextChannel>> {
        self.channel(id)?.as_text().cloned()
    }

    pub fn voice_channel(&self, id: ChannelId) -> Option<Arc<ServerVoiceChannel>> {
        self.channel(id)?.as_voice().cloned()
    }

    pub fn category(&self, id: ChannelId) -> Option<Arc<ChannelCategory>> {
        self.channel(id)?.as_category().cloned()
    }

    pub fn group_channel(&self, id: ChannelId) -> Option<Arc<GroupChannel>> {
        self.channel(id)?.as_group().cloned()
    }

    pub fn private_channel(&self, id: ChannelId) -> Option<Arc<PrivateChannel>> {
        self.channel(id)?.as_private().cloned()
    }

    /// Category `id`, provided it belongs to `server`.
    pub fn category_in_server(
        &self,
        server: GuildId,
        id: ChannelId,
    ) -> Option<Arc<ChannelCategory>> {
        self.category(id)
            .filter(|category| category.server_id() == server)
    }

    /// Every cached server channel belonging to `server`, ordered by raw position.
    pub fn server_channels(&self, server: GuildId) -> Vec<Arc<dyn ServerChannel>> {
        let mut channels: Vec<Arc<dyn ServerChannel>> = self
            .channels
            .iter()
            .filter_map(|entry| shared_server_channel(entry.value()))
            .filter(|channel| channel.server_id() == server)
            .collect();
        channels.sort_by_key(|channel| (channel.position(), channel.id().get()));
        channels
    }
}

fn shared_server_channel(channel: &Channel) -> Option<Arc<dyn ServerChannel>> {
    match channel {
        Channel::Text(channel) => Some(channel.clone() as Arc<dyn ServerChannel>),
        Channel::Voice(channel) => Some(channel.clone() as Arc<dyn ServerChannel>),
        Channel::Category(channel) => Some(channel.clone() as Arc<dyn ServerChannel>),
        Channel::Group(_) | Channel::Private(_) => None,
    }
}
