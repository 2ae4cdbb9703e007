//! Servers and the participants permission overwrites can target.

use serenity::all::{GuildId, RoleId, UserId};

/// Discord server (guild) that owns server channels and roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: GuildId,
    pub name: String,
}

impl Server {
    pub fn new(id: GuildId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Role inside a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub server_id: GuildId,
    pub name: String,
}

impl Role {
    pub fn new(id: RoleId, server_id: GuildId, name: impl Into<String>) -> Self {
        Self {
            id,
            server_id,
            name: name.into(),
        }
    }
}

/// User known to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
