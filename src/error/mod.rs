//! Error types for the synchronization engine.
//!
//! `UpdateError` is what an update handler invocation returns when it has to abort
//! processing a message. Skipped work (uncached entities, unknown channel types,
//! unresolvable participants during the removal sweep) is not an error and is only
//! logged. Listener failures never surface here; the dispatcher isolates them.

pub mod config;
pub mod listener;

use serenity::all::{RoleId, UserId};
use thiserror::Error;

pub use config::ConfigError;
pub use listener::ListenerError;

/// Reason an update message was aborted.
///
/// Side effects applied before the failing step stay applied; the handler does not
/// roll back a partially processed message.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The payload could not be parsed into a channel update.
    ///
    /// Raised before any cache mutation, e.g. for a missing or zero `id`.
    #[error("Malformed channel update payload: {0}")]
    MalformedPacket(#[from] serde_json::Error),

    /// An overwrite entry references a role that is not in the local cache.
    #[error("Received channel update with unknown role {0}")]
    UnknownRole(RoleId),

    /// An overwrite entry references a user that is not in the local cache.
    #[error("Received channel update with unknown user {0}")]
    UnknownUser(UserId),

    /// An overwrite entry has a participant type other than role or member.
    #[error("Permission overwrite with unknown type: {0}")]
    UnknownOverwriteType(String),
}
