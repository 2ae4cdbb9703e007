//! Handler for attributes only categories carry.
//!
//! The category name is shared with every server channel and already handled by
//! [`super::server_channel`]; categories have no parent of their own.

use crate::event::{EventKind, ScopeChain};
use crate::handler::HandlerContext;
use crate::model::{Channel, ChannelUpdate};

/// Applies an NSFW flag change of a category.
pub fn handle_channel_category(ctx: &HandlerContext, update: &ChannelUpdate) {
    let Some(category) = ctx.cache.category(update.channel_id()) else {
        tracing::trace!("Ignoring update for uncached category {}", update.id);
        return;
    };
    let Some(nsfw) = update.nsfw else {
        return;
    };

    if let Some(change) = category.nsfw.replace_if_changed(nsfw) {
        let chain = ScopeChain::server_channel(&*category);
        let channel = Channel::Category(category);
        ctx.emit(EventKind::SERVER_CHANNEL_NSFW_FLAG, &channel, &chain, change);
    }
}
