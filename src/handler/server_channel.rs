//! Handler for the attributes shared by all server channels.
//!
//! Runs for text channels, voice channels and categories before their kind-specific
//! handler. Covers the name, the raw position and the permission overwrites, and
//! hosts the parent-category comparison used by text and voice channels.

use serenity::all::ChannelId;

use crate::error::UpdateError;
use crate::event::{EventKind, ScopeChain};
use crate::handler::{overwrite, HandlerContext};
use crate::model::{Channel, ChannelUpdate, Field, ServerChannel};

/// Applies name, position and overwrite changes of any server channel.
///
/// # Arguments
/// - `ctx` - Cache, event bus and configuration
/// - `update` - Incoming channel snapshot
///
/// # Returns
/// - `Ok(())` - All changes applied (or the channel is not cached)
/// - `Err(UpdateError)` - An overwrite entry could not be resolved; name and
///   position changes and overwrites processed before it stay applied
pub fn handle_server_channel(
    ctx: &HandlerContext,
    update: &ChannelUpdate,
) -> Result<(), UpdateError> {
    let channel_id = update.channel_id();
    let Some(channel) = ctx.cache.channel(channel_id) else {
        tracing::trace!("Ignoring update for uncached channel {}", channel_id);
        return Ok(());
    };
    let Some(server_channel) = channel.as_server_channel() else {
        tracing::trace!("Channel {} is not a server channel", channel_id);
        return Ok(());
    };
    let chain = ScopeChain::server_channel(server_channel);
    let core = server_channel.core();

    if let Some(name) = &update.name {
        if let Some(change) = core.name.replace_if_changed(name.clone()) {
            ctx.emit(EventKind::SERVER_CHANNEL_NAME, &channel, &chain, change);
        }
    }

    if let Some(position) = update.position {
        if let Some(change) = core.position.replace_if_changed(position) {
            ctx.emit(EventKind::SERVER_CHANNEL_POSITION, &channel, &chain, change);
        }
    }

    overwrite::reconcile_overwrites(ctx, &channel, server_channel, update.overwrites())
}

/// Applies a parent category change of a text or voice channel.
///
/// The incoming id is resolved against the categories of the channel's own server;
/// an absent id or one that does not resolve means "no category". Identity is decided
/// on the resolved categories, so a cached parent id pointing at a category that is no
/// longer known compares equal to "no category".
pub(crate) fn handle_parent_category(
    ctx: &HandlerContext,
    channel: &Channel,
    server_channel: &dyn ServerChannel,
    parent: &Field<Option<ChannelId>>,
    incoming: Option<ChannelId>,
) {
    let server_id = server_channel.server_id();
    let resolve = |id: &Option<ChannelId>| {
        id.and_then(|id| ctx.cache.category_in_server(server_id, id))
            .map(|category| category.id())
    };

    let new_parent = resolve(&incoming);
    if let Some(change) = parent.replace_if_changed_by(new_parent, resolve) {
        let chain = ScopeChain::server_channel(server_channel);
        ctx.emit(EventKind::SERVER_CHANNEL_CATEGORY, channel, &chain, change);
    }
}
