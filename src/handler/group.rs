//! Handler for group direct-message channels.

use crate::event::{EventKind, ScopeChain};
use crate::handler::HandlerContext;
use crate::model::{Channel, ChannelUpdate};

/// Applies a name change of a group channel.
///
/// Groups belong to no server: the event goes to listeners of the group itself, of
/// every current member, and to global listeners.
///
/// # Arguments
/// - `ctx` - Cache, event bus and configuration
/// - `update` - Incoming channel snapshot
pub fn handle_group_channel(ctx: &HandlerContext, update: &ChannelUpdate) {
    let Some(group) = ctx.cache.group_channel(update.channel_id()) else {
        tracing::trace!("Ignoring update for uncached group channel {}", update.id);
        return;
    };
    let Some(name) = &update.name else {
        return;
    };

    if let Some(change) = group.name.replace_if_changed(name.clone()) {
        let chain = ScopeChain::group_channel(&group);
        let channel = Channel::Group(group);
        ctx.emit(EventKind::GROUP_CHANNEL_NAME, &channel, &chain, change);
    }
}
