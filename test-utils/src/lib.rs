//! Channel Sync Test Utils
//!
//! Shared helpers for the channel synchronization tests. The crate deliberately knows
//! nothing about the engine's own types: it produces raw gateway payloads the way
//! Discord sends them and records what listeners observe.
//!
//! # Overview
//!
//! - **ChannelPacketBuilder**: Fluent builder for `CHANNEL_UPDATE` payloads
//! - **Recorder**: Thread-safe log for values captured inside listener callbacks
//!
//! # Usage
//!
//! ```rust
//! use test_utils::packet::ChannelPacketBuilder;
//!
//! let packet = ChannelPacketBuilder::text(10)
//!     .name("general")
//!     .role_overwrite(20, 1024, 0)
//!     .build();
//!
//! assert_eq!(packet["id"], "10");
//! assert_eq!(packet["type"], 0);
//! assert_eq!(packet["permission_overwrites"][0]["allow"], "1024");
//! ```

pub mod packet;
pub mod recorder;

pub use packet::ChannelPacketBuilder;
pub use recorder::Recorder;
