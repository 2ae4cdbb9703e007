use super::*;

/// Tests renaming a text channel.
///
/// Verifies that a changed name is written to the cache and reported once as a
/// server channel name change carrying the previous and the new name.
///
/// Expected: Ok with one name event "general" -> "lounge"
#[test]
fn renames_text_channel() {
    let fixture = Fixture::new();

    let result = fixture.handle(ChannelPacketBuilder::text(TEXT).name("lounge"));

    assert!(result.is_ok());
    assert_eq!(fixture.text().name(), "lounge");
    let events = fixture.events.take();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), EventKind::SERVER_CHANNEL_NAME);
    assert_eq!(events[0].old_value(), &text_value("general"));
    assert_eq!(events[0].new_value(), &text_value("lounge"));
    assert_eq!(events[0].channel_id(), ChannelId::new(TEXT));
    assert!(events[0].participant().is_none());
}

/// Tests re-sending the cached name.
///
/// Verifies that an update whose name equals the cached one neither writes nor
/// reports anything.
///
/// Expected: Ok with no events
#[test]
fn unchanged_name_is_not_reported() {
    let fixture = Fixture::new();

    let result = fixture.handle(ChannelPacketBuilder::text(TEXT).name("general").position(0));

    assert!(result.is_ok());
    assert_eq!(fixture.text().name(), "general");
    assert!(fixture.events.is_empty());
}

/// Tests an update without a name attribute.
///
/// Verifies that a partial snapshot leaves the cached name alone instead of
/// treating the missing name as a change.
///
/// Expected: Ok with name untouched and no events
#[test]
fn missing_name_keeps_cached_name() {
    let fixture = Fixture::new();

    let result = fixture.handle(ChannelPacketBuilder::text(TEXT));

    assert!(result.is_ok());
    assert_eq!(fixture.text().name(), "general");
    assert!(fixture.events.is_empty());
}

/// Tests renaming a voice channel and a category.
///
/// Verifies that the shared name attribute is handled for every server channel
/// kind and reported under the same event kind.
///
/// Expected: Ok with one name event per channel
#[test]
fn renames_voice_channel_and_category() {
    let fixture = Fixture::new();

    fixture
        .handle(ChannelPacketBuilder::voice(VOICE).name("stage"))
        .unwrap();
    fixture
        .handle(ChannelPacketBuilder::category(CATEGORY).name("welcome"))
        .unwrap();

    assert_eq!(fixture.voice().name(), "stage");
    assert_eq!(fixture.category().name(), "welcome");
    let events = fixture.events.take();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|event| event.kind() == EventKind::SERVER_CHANNEL_NAME));
    assert_eq!(events[0].channel_id(), ChannelId::new(VOICE));
    assert_eq!(events[1].channel_id(), ChannelId::new(CATEGORY));
    assert_eq!(events[1].old_value(), &text_value("info"));
}

/// Tests that the event subject is the cached entity itself.
///
/// Verifies that listeners receive a handle to the same shared channel the cache
/// holds, already carrying the new name.
///
/// Expected: Ok with event channel pointing at the cached text channel
#[test]
fn event_subject_is_cached_channel() {
    let fixture = Fixture::new();

    fixture
        .handle(ChannelPacketBuilder::text(TEXT).name("lounge"))
        .unwrap();

    let events = fixture.events.take();
    let cached = fixture.cache.channel(ChannelId::new(TEXT)).unwrap();
    assert!(events[0].channel().same_entity(&cached));
    let subject = events[0].channel().as_text().unwrap();
    assert_eq!(subject.name(), "lounge");
}
