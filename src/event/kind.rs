/// Entity family an event is reported for.
///
/// Name, position and overwrite changes of text channels, voice channels and
/// categories are all reported as [`EntityKind::ServerChannel`] events; only the
/// attributes specific to one channel kind use the narrower families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    ServerChannel,
    ServerTextChannel,
    ServerVoiceChannel,
    GroupChannel,
}

/// Attribute that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Position,
    OverwrittenPermissions,
    NsfwFlag,
    Category,
    Topic,
    Bitrate,
    UserLimit,
}

/// Key listeners are registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind {
    pub entity: EntityKind,
    pub field: FieldKind,
}

impl EventKind {
    pub const SERVER_CHANNEL_NAME: Self = Self::new(EntityKind::ServerChannel, FieldKind::Name);
    pub const SERVER_CHANNEL_POSITION: Self =
        Self::new(EntityKind::ServerChannel, FieldKind::Position);
    pub const SERVER_CHANNEL_OVERWRITTEN_PERMISSIONS: Self =
        Self::new(EntityKind::ServerChannel, FieldKind::OverwrittenPermissions);
    pub const SERVER_CHANNEL_NSFW_FLAG: Self =
        Self::new(EntityKind::ServerChannel, FieldKind::NsfwFlag);
    pub const SERVER_CHANNEL_CATEGORY: Self =
        Self::new(EntityKind::ServerChannel, FieldKind::Category);
    pub const SERVER_TEXT_CHANNEL_TOPIC: Self =
        Self::new(EntityKind::ServerTextChannel, FieldKind::Topic);
    pub const SERVER_VOICE_CHANNEL_BITRATE: Self =
        Self::new(EntityKind::ServerVoiceChannel, FieldKind::Bitrate);
    pub const SERVER_VOICE_CHANNEL_USER_LIMIT: Self =
        Self::new(EntityKind::ServerVoiceChannel, FieldKind::UserLimit);
    pub const GROUP_CHANNEL_NAME: Self = Self::new(EntityKind::GroupChannel, FieldKind::Name);

    pub const fn new(entity: EntityKind, field: FieldKind) -> Self {
        Self { entity, field }
    }
}
