//! Channel update handlers.
//!
//! [`ChannelUpdateHandler`] is the entry point for `CHANNEL_UPDATE` payloads. It reads
//! the channel type discriminator and runs the matching handlers:
//!
//! | Type | Handlers |
//! |------|----------|
//! | text (0) | [`server_channel`], then [`text`] |
//! | private (1) | [`private`] |
//! | voice (2) | [`server_channel`], then [`voice`] |
//! | group (3) | [`group`] |
//! | category (4) | [`server_channel`], then [`category`] |
//!
//! Unknown types are ignored. Each handler compares the incoming attributes against
//! the cached entity, writes what changed and publishes one event per changed field.
//! Messages for entities that are not cached are dropped silently.

pub mod category;
pub mod group;
pub mod overwrite;
pub mod private;
pub mod server_channel;
pub mod text;
pub mod voice;

use std::sync::Arc;

use serde_json::Value;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::UpdateError;
use crate::event::{ChangeEvent, EventBus, EventKind, FieldValue, ScopeChain};
use crate::model::{Change, Channel, ChannelKind, ChannelUpdate};

/// Gateway payload handler for one packet type.
pub trait PacketHandler: Send + Sync {
    /// Gateway event name this handler consumes.
    fn packet_type(&self) -> &'static str;

    /// Processes one payload to completion.
    fn handle(&self, packet: &Value) -> Result<(), UpdateError>;
}

/// Shared collaborators passed to every handler function.
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub cache: &'a Cache,
    pub bus: &'a EventBus,
    pub config: &'a Config,
}

impl HandlerContext<'_> {
    /// Publishes a field change of `channel` along `chain`.
    pub(crate) fn emit<T: Into<FieldValue>>(
        &self,
        kind: EventKind,
        channel: &Channel,
        chain: &ScopeChain,
        change: Change<T>,
    ) {
        let event = ChangeEvent::new(kind, channel.clone(), change);
        tracing::debug!(
            "Channel {} {:?} changed from {:?} to {:?}",
            channel.id(),
            kind.field,
            event.old_value(),
            event.new_value()
        );
        self.bus.publish(&event, chain);
    }
}

/// Applies `CHANNEL_UPDATE` payloads to the cache and notifies listeners.
///
/// Handling is synchronous and never blocks on I/O. Updates for different channels
/// may be handled concurrently from several threads; updates for the same channel are
/// expected in arrival order from the transport.
pub struct ChannelUpdateHandler {
    cache: Arc<Cache>,
    bus: Arc<EventBus>,
    config: Config,
}

impl ChannelUpdateHandler {
    /// Creates a new handler instance.
    ///
    /// # Arguments
    /// - `cache` - Entity cache the updates are applied to
    /// - `bus` - Listener registries change events are published on
    /// - `config` - Policies for unresolvable participants
    pub fn new(cache: Arc<Cache>, bus: Arc<EventBus>, config: Config) -> Self {
        Self { cache, bus, config }
    }

    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn context(&self) -> HandlerContext<'_> {
        HandlerContext {
            cache: &self.cache,
            bus: &self.bus,
            config: &self.config,
        }
    }

    /// Routes an already parsed update to the handlers for its channel type.
    ///
    /// # Arguments
    /// - `update` - Parsed channel snapshot
    ///
    /// # Returns
    /// - `Ok(())` - The update was applied, or ignored as unknown/uncached
    /// - `Err(UpdateError)` - Processing was aborted; changes made before the
    ///   failing overwrite entry remain applied
    pub fn handle_update(&self, update: &ChannelUpdate) -> Result<(), UpdateError> {
        let ctx = self.context();

        match update.kind {
            ChannelKind::Text => {
                server_channel::handle_server_channel(&ctx, update)?;
                text::handle_text_channel(&ctx, update);
            }
            ChannelKind::Private => private::handle_private_channel(&ctx, update),
            ChannelKind::Voice => {
                server_channel::handle_server_channel(&ctx, update)?;
                voice::handle_voice_channel(&ctx, update);
            }
            ChannelKind::Group => group::handle_group_channel(&ctx, update),
            ChannelKind::Category => {
                server_channel::handle_server_channel(&ctx, update)?;
                category::handle_channel_category(&ctx, update);
            }
            ChannelKind::Unknown(kind) => {
                tracing::trace!(
                    "Ignoring update for channel {} with unhandled type {}",
                    update.id,
                    kind
                );
            }
        }

        Ok(())
    }
}

impl PacketHandler for ChannelUpdateHandler {
    fn packet_type(&self) -> &'static str {
        "CHANNEL_UPDATE"
    }

    fn handle(&self, packet: &Value) -> Result<(), UpdateError> {
        let update = ChannelUpdate::from_value(packet)?;
        self.handle_update(&update)
    }
}

#[cfg(test)]
mod test;
