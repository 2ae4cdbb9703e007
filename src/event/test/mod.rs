use std::sync::Arc;

use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use test_utils::recorder::Recorder;

use crate::error::ListenerError;
use crate::event::{
    ChangeEvent, Dispatcher, EventBus, EventKind, FieldValue, Listener, Participant, Scope,
    ScopeChain,
};
use crate::model::{Change, Channel, GroupChannel, Role, ServerTextChannel, User};

mod bus;

const SERVER: u64 = 1;
const TEXT: u64 = 100;

fn text_channel() -> Channel {
    Channel::from(ServerTextChannel::new(
        ChannelId::new(TEXT),
        GuildId::new(SERVER),
        "general",
        0,
    ))
}

fn rename_event() -> ChangeEvent {
    ChangeEvent::new(
        EventKind::SERVER_CHANNEL_NAME,
        text_channel(),
        Change {
            old: "general".to_string(),
            new: "lounge".to_string(),
        },
    )
}

/// Chain of a text channel in `SERVER`.
fn text_chain() -> ScopeChain {
    ScopeChain::from(vec![
        Scope::Channel(ChannelId::new(TEXT)),
        Scope::Server(GuildId::new(SERVER)),
        Scope::Global,
    ])
}

/// Listener pushing `label` into `calls` on every event.
fn labelled(calls: &Recorder<&'static str>, label: &'static str) -> Listener {
    let sink = calls.clone();
    Listener::infallible(move |_| sink.push(label))
}
