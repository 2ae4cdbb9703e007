//! Handler for attributes only voice channels carry.

use crate::event::{EventKind, ScopeChain};
use crate::handler::{server_channel, HandlerContext};
use crate::model::{Channel, ChannelUpdate};

/// Applies bitrate, user limit and parent category changes of a voice channel.
///
/// The cached user limit is 0 when the channel is unlimited, so an incoming 0
/// against an unlimited channel is not a change.
///
/// # Arguments
/// - `ctx` - Cache, event bus and configuration
/// - `update` - Incoming channel snapshot
pub fn handle_voice_channel(ctx: &HandlerContext, update: &ChannelUpdate) {
    let Some(voice_channel) = ctx.cache.voice_channel(update.channel_id()) else {
        tracing::trace!("Ignoring update for uncached voice channel {}", update.id);
        return;
    };
    let channel = Channel::Voice(voice_channel.clone());
    let chain = ScopeChain::server_channel(&*voice_channel);

    if let Some(bitrate) = update.bitrate {
        if let Some(change) = voice_channel.bitrate.replace_if_changed(bitrate) {
            ctx.emit(EventKind::SERVER_VOICE_CHANNEL_BITRATE, &channel, &chain, change);
        }
    }

    if let Some(user_limit) = update.user_limit {
        if let Some(change) = voice_channel.user_limit.replace_if_changed(user_limit) {
            ctx.emit(EventKind::SERVER_VOICE_CHANNEL_USER_LIMIT, &channel, &chain, change);
        }
    }

    server_channel::handle_parent_category(
        ctx,
        &channel,
        &*voice_channel,
        &voice_channel.parent_id,
        update.parent_channel_id(),
    );
}
