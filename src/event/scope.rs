//! Listener scopes and the order in which they are consulted.

use serenity::all::{ChannelId, GuildId, RoleId, UserId};

use crate::event::Participant;
use crate::model::{GroupChannel, ServerChannel};

/// Granularity a listener is registered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Events about one channel.
    Channel(ChannelId),
    /// Events concerning one role, such as its overwrite in some channel.
    Role(RoleId),
    /// Events concerning one user: their overwrites and the groups they are in.
    User(UserId),
    /// Events about any channel of one server.
    Server(GuildId),
    /// Every event the client sees.
    Global,
}

impl From<&Participant> for Scope {
    fn from(participant: &Participant) -> Self {
        match participant {
            Participant::Role(role) => Scope::Role(role.id),
            Participant::Member(user) => Scope::User(user.id),
        }
    }
}

/// Ordered list of scopes an event is delivered to.
///
/// Order is entity first, then the participant the event concerns (if any), then
/// the container, then global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeChain(Vec<Scope>);

impl ScopeChain {
    /// Channel, its server, global.
    pub fn server_channel(channel: &dyn ServerChannel) -> Self {
        ScopeChain(vec![
            Scope::Channel(channel.id()),
            Scope::Server(channel.server_id()),
            Scope::Global,
        ])
    }

    /// Channel, the participant whose overwrite changed, the channel's server, global.
    pub fn overwrite(channel: &dyn ServerChannel, participant: &Participant) -> Self {
        ScopeChain(vec![
            Scope::Channel(channel.id()),
            Scope::from(participant),
            Scope::Server(channel.server_id()),
            Scope::Global,
        ])
    }

    /// Group channel, each current member in join order, global.
    ///
    /// Groups have no server; their members act as the container scope.
    pub fn group_channel(group: &GroupChannel) -> Self {
        let members = group.members();
        let mut scopes = Vec::with_capacity(members.len() + 2);
        scopes.push(Scope::Channel(group.id()));
        scopes.extend(members.into_iter().map(Scope::User));
        scopes.push(Scope::Global);
        ScopeChain(scopes)
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.0
    }
}

impl From<Vec<Scope>> for ScopeChain {
    fn from(scopes: Vec<Scope>) -> Self {
        ScopeChain(scopes)
    }
}
