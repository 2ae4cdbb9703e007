//! Reconciliation of a server channel's permission overwrites.
//!
//! The incoming overwrite list is authoritative. Reconciliation runs in two passes:
//!
//! 1. **Add/update**: every entry is resolved to a cached role or user and written to
//!    the matching map if it differs from what is stored. An event is published when
//!    the stored value (absence reads as [`OverwrittenPermissions::EMPTY`]) differs
//!    from the incoming one. An entry naming an unknown role or user aborts the
//!    message unless the configuration says to skip it; an unknown entry type always
//!    aborts.
//! 2. **Sweep**: cached entries whose participant did not appear in the list are
//!    removed and reported with [`OverwrittenPermissions::EMPTY`] as new value. Entries
//!    whose participant is no longer cached are left alone (or dropped silently,
//!    depending on configuration) since no participant can be attached to the event.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serenity::all::{RoleId, UserId};

use crate::config::{UnknownParticipantPolicy, UnresolvedSweepPolicy};
use crate::error::UpdateError;
use crate::event::{ChangeEvent, Participant, ScopeChain};
use crate::handler::HandlerContext;
use crate::model::{
    Change, Channel, OverwriteEntry, OverwriteType, OverwrittenPermissions, ServerChannel,
};

/// Reconciles the overwrite maps of `server_channel` against `entries`.
///
/// # Arguments
/// - `ctx` - Cache, event bus and configuration
/// - `channel` - Shared handle of the channel, used as event subject
/// - `server_channel` - Server-channel view of the same channel
/// - `entries` - Incoming overwrite list
///
/// # Returns
/// - `Ok(())` - Both passes completed
/// - `Err(UpdateError::UnknownRole | UnknownUser)` - An entry named an uncached
///   participant under the abort policy; earlier entries stay applied and the sweep
///   does not run
/// - `Err(UpdateError::UnknownOverwriteType)` - An entry had an unrecognized type
pub fn reconcile_overwrites(
    ctx: &HandlerContext,
    channel: &Channel,
    server_channel: &dyn ServerChannel,
    entries: &[OverwriteEntry],
) -> Result<(), UpdateError> {
    let overwrites = server_channel.overwrites();
    let mut seen_roles = HashSet::new();
    let mut seen_members = HashSet::new();

    for entry in entries {
        let Some(participant) = resolve_participant(ctx, entry)? else {
            continue;
        };
        let new = entry.permissions();

        let stored = match &participant {
            Participant::Role(role) => {
                seen_roles.insert(role.id);
                store(overwrites.role_map(), role.id, new)
            }
            Participant::Member(user) => {
                seen_members.insert(user.id);
                store(overwrites.member_map(), user.id, new)
            }
        };

        // Writing an explicit empty overwrite where none existed changes nothing
        // observable, so it is stored but not reported.
        let old = stored.unwrap_or(OverwrittenPermissions::EMPTY);
        if let Some(change) = Change::between(old, new) {
            publish(ctx, channel, server_channel, participant, change);
        }
    }

    sweep(
        ctx,
        channel,
        server_channel,
        overwrites.role_map(),
        &seen_roles,
        |id| ctx.cache.role(id).map(Participant::Role),
    );
    sweep(
        ctx,
        channel,
        server_channel,
        overwrites.member_map(),
        &seen_members,
        |id| ctx.cache.user(id).map(Participant::Member),
    );

    Ok(())
}

/// Resolves the participant of `entry` through the cache.
///
/// # Returns
/// - `Ok(Some(Participant))` - The role or user is cached
/// - `Ok(None)` - The participant is unknown and the skip policy is configured
/// - `Err(UpdateError)` - Unknown participant under the abort policy, or unknown type
fn resolve_participant(
    ctx: &HandlerContext,
    entry: &OverwriteEntry,
) -> Result<Option<Participant>, UpdateError> {
    let resolved = match &entry.kind {
        OverwriteType::Role => {
            let id = RoleId::from(entry.id);
            ctx.cache
                .role(id)
                .map(Participant::Role)
                .ok_or(UpdateError::UnknownRole(id))
        }
        OverwriteType::Member => {
            let id = UserId::from(entry.id);
            ctx.cache
                .user(id)
                .map(Participant::Member)
                .ok_or(UpdateError::UnknownUser(id))
        }
        OverwriteType::Other(kind) => {
            return Err(UpdateError::UnknownOverwriteType(kind.clone()));
        }
    };

    match resolved {
        Ok(participant) => Ok(Some(participant)),
        Err(e) if ctx.config.unknown_participant == UnknownParticipantPolicy::Skip => {
            tracing::warn!("Skipping permission overwrite: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Writes `new` under `key` unless an equal value is already stored.
///
/// Compare and write happen under the map's entry lock.
///
/// # Returns
/// - `Some(previous)` - An overwrite was stored before
/// - `None` - The participant had no overwrite
fn store<K>(
    map: &DashMap<K, OverwrittenPermissions>,
    key: K,
    new: OverwrittenPermissions,
) -> Option<OverwrittenPermissions>
where
    K: Eq + Hash,
{
    match map.entry(key) {
        Entry::Occupied(mut occupied) => {
            let previous = *occupied.get();
            if previous != new {
                occupied.insert(new);
            }
            Some(previous)
        }
        Entry::Vacant(vacant) => {
            vacant.insert(new);
            None
        }
    }
}

/// Removes entries of `map` whose key is not in `seen` and reports each removal.
fn sweep<K, F>(
    ctx: &HandlerContext,
    channel: &Channel,
    server_channel: &dyn ServerChannel,
    map: &DashMap<K, OverwrittenPermissions>,
    seen: &HashSet<K>,
    resolve: F,
) where
    K: Copy + Eq + Hash + Display,
    F: Fn(K) -> Option<Participant>,
{
    // Collect first; no shard lock may be held while listeners run.
    let stale: Vec<K> = map
        .iter()
        .map(|entry| *entry.key())
        .filter(|key| !seen.contains(key))
        .collect();

    for key in stale {
        let Some(participant) = resolve(key) else {
            match ctx.config.unresolved_sweep {
                UnresolvedSweepPolicy::Keep => {
                    tracing::debug!(
                        "Keeping overwrite for uncached participant {} in channel {}",
                        key,
                        server_channel.id()
                    );
                }
                UnresolvedSweepPolicy::Remove => {
                    map.remove(&key);
                    tracing::debug!(
                        "Dropped overwrite for uncached participant {} in channel {}",
                        key,
                        server_channel.id()
                    );
                }
            }
            continue;
        };

        // Another update may have removed it in the meantime.
        let Some((_, old)) = map.remove(&key) else {
            continue;
        };
        if let Some(change) = Change::between(old, OverwrittenPermissions::EMPTY) {
            publish(ctx, channel, server_channel, participant, change);
        }
    }
}

fn publish(
    ctx: &HandlerContext,
    channel: &Channel,
    server_channel: &dyn ServerChannel,
    participant: Participant,
    change: Change<OverwrittenPermissions>,
) {
    tracing::debug!(
        "Channel {} overwrite for {:?} changed from {:?} to {:?}",
        server_channel.id(),
        participant,
        change.old,
        change.new
    );
    let chain = ScopeChain::overwrite(server_channel, &participant);
    let event = ChangeEvent::overwrite(channel.clone(), participant, change);
    ctx.bus.publish(&event, &chain);
}
