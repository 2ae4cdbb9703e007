//! Change events and their delivery to listeners.
//!
//! Every detected field change is reported as one immutable [`ChangeEvent`] carrying
//! the subject channel, the old and new value, and (for overwrite changes) the role or
//! user concerned. Listeners register on the [`EventBus`] per `(Scope, EventKind)`;
//! publishing resolves the ordered listener set for a [`ScopeChain`] and hands it to
//! the [`Dispatcher`].
//!
//! # Example
//!
//! ```rust
//! use channel_sync::event::{EventBus, EventKind, Listener, Scope};
//!
//! let bus = EventBus::new();
//! let listener = Listener::infallible(|event| {
//!     println!("{:?}: {:?} -> {:?}", event.kind(), event.old_value(), event.new_value());
//! });
//!
//! assert!(bus.register(Scope::Global, EventKind::SERVER_CHANNEL_NAME, &listener));
//! assert!(!bus.register(Scope::Global, EventKind::SERVER_CHANNEL_NAME, &listener));
//! ```

pub mod bus;
pub mod dispatch;
pub mod kind;
pub mod listener;
pub mod scope;

use std::sync::Arc;

use serenity::all::ChannelId;

use crate::model::{Change, Channel, OverwrittenPermissions, Role, User};

pub use bus::EventBus;
pub use dispatch::{DispatchReport, Dispatcher};
pub use kind::{EntityKind, EventKind, FieldKind};
pub use listener::{Listener, ListenerId};
pub use scope::{Scope, ScopeChain};

/// Value of a changed attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    Overwrite(OverwrittenPermissions),
    /// Parent category id; `None` means the channel has no category.
    Category(Option<ChannelId>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_overwrite(&self) -> Option<OverwrittenPermissions> {
        match self {
            FieldValue::Overwrite(overwrite) => Some(*overwrite),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<Option<ChannelId>> {
        match self {
            FieldValue::Category(category) => Some(*category),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<OverwrittenPermissions> for FieldValue {
    fn from(value: OverwrittenPermissions) -> Self {
        FieldValue::Overwrite(value)
    }
}

impl From<Option<ChannelId>> for FieldValue {
    fn from(value: Option<ChannelId>) -> Self {
        FieldValue::Category(value)
    }
}

/// Role or user an overwrite change concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Participant {
    Role(Arc<Role>),
    Member(Arc<User>),
}

/// Immutable record of one field change.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    kind: EventKind,
    channel: Channel,
    participant: Option<Participant>,
    old: FieldValue,
    new: FieldValue,
}

impl ChangeEvent {
    /// Builds an event from a detected change.
    pub fn new<T: Into<FieldValue>>(kind: EventKind, channel: Channel, change: Change<T>) -> Self {
        Self {
            kind,
            channel,
            participant: None,
            old: change.old.into(),
            new: change.new.into(),
        }
    }

    /// Builds an overwrite change event for `participant`.
    pub fn overwrite(
        channel: Channel,
        participant: Participant,
        change: Change<OverwrittenPermissions>,
    ) -> Self {
        Self {
            participant: Some(participant),
            ..Self::new(EventKind::SERVER_CHANNEL_OVERWRITTEN_PERMISSIONS, channel, change)
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Channel whose field changed.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn channel_id(&self) -> ChannelId {
        self.channel.id()
    }

    /// Role or user concerned, for overwrite changes.
    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }

    pub fn old_value(&self) -> &FieldValue {
        &self.old
    }

    pub fn new_value(&self) -> &FieldValue {
        &self.new
    }
}

#[cfg(test)]
mod test;
