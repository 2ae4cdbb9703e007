use crate::handler::HandlerContext;
use crate::model::ChannelUpdate;

/// Consumes a private channel update.
///
/// One-to-one channels have no attribute this client mirrors, so the update has no
/// effect.
pub fn handle_private_channel(_ctx: &HandlerContext, update: &ChannelUpdate) {
    tracing::trace!("Private channel {} updated; nothing to apply", update.id);
}
