//! Handler for attributes only text channels carry.

use crate::event::{EventKind, ScopeChain};
use crate::handler::{server_channel, HandlerContext};
use crate::model::{Channel, ChannelUpdate};

/// Applies topic, NSFW flag and parent category changes of a text channel.
///
/// A missing or null topic is read as the empty string. A missing NSFW flag leaves the
/// cached flag untouched. A missing or null parent id means the channel has no
/// category.
///
/// # Arguments
/// - `ctx` - Cache, event bus and configuration
/// - `update` - Incoming channel snapshot
pub fn handle_text_channel(ctx: &HandlerContext, update: &ChannelUpdate) {
    let Some(text_channel) = ctx.cache.text_channel(update.channel_id()) else {
        tracing::trace!("Ignoring update for uncached text channel {}", update.id);
        return;
    };
    let channel = Channel::Text(text_channel.clone());
    let chain = ScopeChain::server_channel(&*text_channel);

    if let Some(change) = text_channel.topic.replace_if_changed(update.topic_or_empty()) {
        ctx.emit(EventKind::SERVER_TEXT_CHANNEL_TOPIC, &channel, &chain, change);
    }

    if let Some(nsfw) = update.nsfw {
        if let Some(change) = text_channel.nsfw.replace_if_changed(nsfw) {
            ctx.emit(EventKind::SERVER_CHANNEL_NSFW_FLAG, &channel, &chain, change);
        }
    }

    server_channel::handle_parent_category(
        ctx,
        &channel,
        &*text_channel,
        &text_channel.parent_id,
        update.parent_channel_id(),
    );
}
