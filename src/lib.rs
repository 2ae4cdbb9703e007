//! Client-side synchronization of Discord channel state.
//!
//! Consumes `CHANNEL_UPDATE` gateway payloads, compares each one against the locally
//! cached channel, applies what changed and notifies the listeners registered for
//! that change.
//!
//! - [`cache`] holds the mirrored servers, roles, users and channels
//! - [`handler`] parses payloads and applies them per channel kind
//! - [`event`] defines change events, listener scopes and dispatch
//! - [`model`] contains the entities and the typed payload
//! - [`config`] and [`error`] cover behavior switches and failure reporting
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use channel_sync::cache::Cache;
//! use channel_sync::config::Config;
//! use channel_sync::event::{EventBus, EventKind, Listener, Scope};
//! use channel_sync::handler::{ChannelUpdateHandler, PacketHandler};
//! use channel_sync::model::{Server, ServerChannel, ServerTextChannel};
//! use serenity::all::{ChannelId, GuildId};
//!
//! let cache = Arc::new(Cache::new());
//! cache.insert_server(Server::new(GuildId::new(1), "Guild"));
//! cache.insert_channel(ServerTextChannel::new(ChannelId::new(10), GuildId::new(1), "general", 0));
//!
//! let bus = Arc::new(EventBus::new());
//! bus.register(
//!     Scope::Global,
//!     EventKind::SERVER_CHANNEL_NAME,
//!     &Listener::infallible(|event| println!("renamed to {:?}", event.new_value())),
//! );
//!
//! let handler = ChannelUpdateHandler::new(cache.clone(), bus, Config::default());
//! handler
//!     .handle(&serde_json::json!({ "id": "10", "type": 0, "name": "lounge" }))
//!     .unwrap();
//!
//! assert_eq!(cache.text_channel(ChannelId::new(10)).unwrap().name(), "lounge");
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod model;

pub use cache::Cache;
pub use config::Config;
pub use error::UpdateError;
pub use event::{ChangeEvent, EventBus, EventKind, Listener, Scope};
pub use handler::{ChannelUpdateHandler, PacketHandler};
