use std::sync::Arc;

use serenity::all::{ChannelId, GuildId, Permissions, RoleId, UserId};
use test_utils::{packet::ChannelPacketBuilder, recorder::Recorder};

use crate::cache::Cache;
use crate::config::{Config, UnknownParticipantPolicy, UnresolvedSweepPolicy};
use crate::error::UpdateError;
use crate::event::{ChangeEvent, EventBus, EventKind, FieldValue, Listener, Participant, Scope};
use crate::handler::{ChannelUpdateHandler, PacketHandler};
use crate::model::{
    ChannelCategory, GroupChannel, OverwrittenPermissions, PrivateChannel, Role, Server,
    ServerChannel, ServerTextChannel, ServerVoiceChannel, User,
};

mod name;

const SERVER: u64 = 1;
const OTHER_SERVER: u64 = 2;
const ROLE: u64 = 20;
const OTHER_ROLE: u64 = 21;
const USER: u64 = 30;
const OTHER_USER: u64 = 31;
const TEXT: u64 = 100;
const VOICE: u64 = 101;
const CATEGORY: u64 = 102;
const OTHER_CATEGORY: u64 = 103;
const FOREIGN_CATEGORY: u64 = 104;
const GROUP: u64 = 110;
const PRIVATE: u64 = 111;

/// Every event kind the handlers publish.
const ALL_KINDS: [EventKind; 9] = [
    EventKind::SERVER_CHANNEL_NAME,
    EventKind::SERVER_CHANNEL_POSITION,
    EventKind::SERVER_CHANNEL_OVERWRITTEN_PERMISSIONS,
    EventKind::SERVER_CHANNEL_NSFW_FLAG,
    EventKind::SERVER_CHANNEL_CATEGORY,
    EventKind::SERVER_TEXT_CHANNEL_TOPIC,
    EventKind::SERVER_VOICE_CHANNEL_BITRATE,
    EventKind::SERVER_VOICE_CHANNEL_USER_LIMIT,
    EventKind::GROUP_CHANNEL_NAME,
];

/// Handler wired to a seeded cache and a global listener recording every event.
///
/// The cache holds two servers, two roles and two users, a text channel "general" at
/// position 0, a voice channel "voice" at 64000 bps, categories "info" and "archive",
/// a category in the other server, a group "friends" with both users and a private
/// channel. No channel has overwrites, a topic or a parent category.
struct Fixture {
    cache: Arc<Cache>,
    bus: Arc<EventBus>,
    handler: ChannelUpdateHandler,
    events: Recorder<ChangeEvent>,
}

impl Fixture {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        let cache = Arc::new(Cache::new());
        let server = GuildId::new(SERVER);
        let other_server = GuildId::new(OTHER_SERVER);

        cache.insert_server(Server::new(server, "Guild"));
        cache.insert_server(Server::new(other_server, "Other Guild"));
        cache.insert_role(Role::new(RoleId::new(ROLE), server, "Members"));
        cache.insert_role(Role::new(RoleId::new(OTHER_ROLE), server, "Moderators"));
        cache.insert_user(User::new(UserId::new(USER), "alice"));
        cache.insert_user(User::new(UserId::new(OTHER_USER), "bob"));

        cache.insert_channel(ServerTextChannel::new(ChannelId::new(TEXT), server, "general", 0));
        cache.insert_channel(ServerVoiceChannel::new(
            ChannelId::new(VOICE),
            server,
            "voice",
            1,
            64000,
        ));
        cache.insert_channel(ChannelCategory::new(ChannelId::new(CATEGORY), server, "info", 2));
        cache.insert_channel(ChannelCategory::new(
            ChannelId::new(OTHER_CATEGORY),
            server,
            "archive",
            3,
        ));
        cache.insert_channel(ChannelCategory::new(
            ChannelId::new(FOREIGN_CATEGORY),
            other_server,
            "elsewhere",
            0,
        ));
        cache.insert_channel(GroupChannel::new(
            ChannelId::new(GROUP),
            "friends",
            vec![UserId::new(USER), UserId::new(OTHER_USER)],
        ));
        cache.insert_channel(PrivateChannel::new(ChannelId::new(PRIVATE), UserId::new(USER)));

        let bus = Arc::new(EventBus::new());
        let events = Recorder::new();
        let sink = events.clone();
        let listener = Listener::infallible(move |event| sink.push(event.clone()));
        for kind in ALL_KINDS {
            bus.register(Scope::Global, kind, &listener);
        }

        let handler = ChannelUpdateHandler::new(cache.clone(), bus.clone(), config);

        Self {
            cache,
            bus,
            handler,
            events,
        }
    }

    fn handle(&self, packet: ChannelPacketBuilder) -> Result<(), UpdateError> {
        self.handler.handle(&packet.build())
    }

    fn text(&self) -> Arc<ServerTextChannel> {
        self.cache.text_channel(ChannelId::new(TEXT)).unwrap()
    }

    fn voice(&self) -> Arc<ServerVoiceChannel> {
        self.cache.voice_channel(ChannelId::new(VOICE)).unwrap()
    }

    fn category(&self) -> Arc<ChannelCategory> {
        self.cache.category(ChannelId::new(CATEGORY)).unwrap()
    }

    fn group(&self) -> Arc<GroupChannel> {
        self.cache.group_channel(ChannelId::new(GROUP)).unwrap()
    }

    /// Kinds of the events recorded so far, draining the recorder.
    fn take_kinds(&self) -> Vec<EventKind> {
        self.events.take().iter().map(ChangeEvent::kind).collect()
    }
}

fn permissions(allow: u64, deny: u64) -> OverwrittenPermissions {
    OverwrittenPermissions::new(
        Permissions::from_bits_retain(allow),
        Permissions::from_bits_retain(deny),
    )
}

fn text_value(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}
