//! Permission overwrites attached to server channels.

use dashmap::DashMap;
use serenity::all::{Permissions, RoleId, UserId};

/// Allow/deny pair overriding a role's or member's base permissions in one channel.
///
/// A participant with no entry in a channel's overwrite maps has no overwrite at all,
/// which is distinct from an explicit overwrite whose masks are both empty. Reads for
/// an absent participant return [`OverwrittenPermissions::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverwrittenPermissions {
    /// Permissions explicitly granted in the channel.
    pub allow: Permissions,
    /// Permissions explicitly revoked in the channel.
    pub deny: Permissions,
}

impl OverwrittenPermissions {
    /// Sentinel for "no overwrite".
    pub const EMPTY: Self = Self {
        allow: Permissions::empty(),
        deny: Permissions::empty(),
    };

    pub fn new(allow: Permissions, deny: Permissions) -> Self {
        Self { allow, deny }
    }

    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}

impl Default for OverwrittenPermissions {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Role- and member-indexed overwrite maps of a single server channel.
///
/// Both maps are concurrent so application code can read or iterate them while an
/// update is being applied on another thread.
#[derive(Debug, Default)]
pub struct Overwrites {
    roles: DashMap<RoleId, OverwrittenPermissions>,
    members: DashMap<UserId, OverwrittenPermissions>,
}

impl Overwrites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite for `role`, or [`OverwrittenPermissions::EMPTY`] when none is set.
    pub fn role(&self, role: RoleId) -> OverwrittenPermissions {
        self.roles
            .get(&role)
            .map(|entry| *entry.value())
            .unwrap_or(OverwrittenPermissions::EMPTY)
    }

    /// Overwrite for `user`, or [`OverwrittenPermissions::EMPTY`] when none is set.
    pub fn member(&self, user: UserId) -> OverwrittenPermissions {
        self.members
            .get(&user)
            .map(|entry| *entry.value())
            .unwrap_or(OverwrittenPermissions::EMPTY)
    }

    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains_key(&role)
    }

    pub fn has_member(&self, user: UserId) -> bool {
        self.members.contains_key(&user)
    }

    /// Snapshot of every role overwrite.
    pub fn roles(&self) -> Vec<(RoleId, OverwrittenPermissions)> {
        self.roles.iter().map(|e| (*e.key(), *e.value())).collect()
    }

    /// Snapshot of every member overwrite.
    pub fn members(&self) -> Vec<(UserId, OverwrittenPermissions)> {
        self.members.iter().map(|e| (*e.key(), *e.value())).collect()
    }

    pub(crate) fn role_map(&self) -> &DashMap<RoleId, OverwrittenPermissions> {
        &self.roles
    }

    pub(crate) fn member_map(&self) -> &DashMap<UserId, OverwrittenPermissions> {
        &self.members
    }

    /// Seeds a role overwrite, used when populating the cache.
    pub fn insert_role(&self, role: RoleId, value: OverwrittenPermissions) {
        self.roles.insert(role, value);
    }

    /// Seeds a member overwrite, used when populating the cache.
    pub fn insert_member(&self, user: UserId, value: OverwrittenPermissions) {
        self.members.insert(user, value);
    }
}
