use super::*;

/// Tests registering the same listener twice at one scope.
///
/// Expected: true then false, with one registration stored
#[test]
fn rejects_duplicate_registration() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    let listener = labelled(&calls, "a");

    assert!(bus.register(Scope::Global, EventKind::SERVER_CHANNEL_NAME, &listener));
    assert!(!bus.register(
        Scope::Global,
        EventKind::SERVER_CHANNEL_NAME,
        &listener.clone()
    ));
    assert_eq!(
        bus.listeners(Scope::Global, EventKind::SERVER_CHANNEL_NAME),
        vec![listener]
    );
}

/// Tests that registrations are keyed by event kind.
///
/// Expected: Name listener not resolved for position events
#[test]
fn resolves_by_event_kind() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    bus.register(
        Scope::Global,
        EventKind::SERVER_CHANNEL_NAME,
        &labelled(&calls, "name"),
    );

    assert!(bus
        .resolve(EventKind::SERVER_CHANNEL_POSITION, &text_chain())
        .is_empty());
    assert_eq!(
        bus.resolve(EventKind::SERVER_CHANNEL_NAME, &text_chain()).len(),
        1
    );
}

/// Tests resolving distinct listeners along a chain.
///
/// Verifies that the entity, container and global listeners are all invoked, in
/// chain order, regardless of the order they were registered in.
///
/// Expected: channel, server, global
#[test]
fn invokes_scopes_in_chain_order() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    let kind = EventKind::SERVER_CHANNEL_NAME;
    bus.register(Scope::Global, kind, &labelled(&calls, "global"));
    bus.register(Scope::Server(GuildId::new(SERVER)), kind, &labelled(&calls, "server"));
    bus.register(Scope::Channel(ChannelId::new(TEXT)), kind, &labelled(&calls, "channel"));

    let report = bus.publish(&rename_event(), &text_chain());

    assert_eq!(report.delivered, 3);
    assert_eq!(calls.snapshot(), vec!["channel", "server", "global"]);
}

/// Tests one listener registered at entity and global scope.
///
/// Expected: exactly one invocation
#[test]
fn deduplicates_listener_across_scopes() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    let kind = EventKind::SERVER_CHANNEL_NAME;
    let listener = labelled(&calls, "once");
    bus.register(Scope::Channel(ChannelId::new(TEXT)), kind, &listener);
    bus.register(Scope::Global, kind, &listener);

    let report = bus.publish(&rename_event(), &text_chain());

    assert_eq!(report.invoked(), 1);
    assert_eq!(calls.snapshot(), vec!["once"]);
}

/// Tests registration order within one scope.
///
/// Expected: listeners invoked in the order they were registered
#[test]
fn keeps_registration_order_within_scope() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    let kind = EventKind::SERVER_CHANNEL_NAME;
    for label in ["first", "second", "third"] {
        bus.register(Scope::Global, kind, &labelled(&calls, label));
    }

    bus.publish(&rename_event(), &text_chain());

    assert_eq!(calls.snapshot(), vec!["first", "second", "third"]);
}

/// Tests listeners of other entities and containers.
///
/// Expected: no invocation for a different channel or server
#[test]
fn ignores_unrelated_scopes() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    let kind = EventKind::SERVER_CHANNEL_NAME;
    bus.register(Scope::Channel(ChannelId::new(TEXT + 1)), kind, &labelled(&calls, "a"));
    bus.register(Scope::Server(GuildId::new(SERVER + 1)), kind, &labelled(&calls, "b"));

    let report = bus.publish(&rename_event(), &text_chain());

    assert_eq!(report.invoked(), 0);
    assert!(calls.is_empty());
}

/// Tests removing a registration from one scope.
///
/// Expected: true once, false afterwards, and the listener no longer invoked there
#[test]
fn unregisters_from_scope() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    let kind = EventKind::SERVER_CHANNEL_NAME;
    let listener = labelled(&calls, "a");
    bus.register(Scope::Global, kind, &listener);
    bus.register(Scope::Server(GuildId::new(SERVER)), kind, &listener);

    assert!(bus.unregister(Scope::Global, kind, listener.id()));
    assert!(!bus.unregister(Scope::Global, kind, listener.id()));
    assert!(bus.listeners(Scope::Global, kind).is_empty());

    bus.publish(&rename_event(), &text_chain());
    assert_eq!(calls.len(), 1);
}

/// Tests removing a listener from every scope and kind.
///
/// Expected: number of removed registrations returned, nothing invoked afterwards
#[test]
fn unregisters_everywhere() {
    let bus = EventBus::new();
    let calls = Recorder::new();
    let listener = labelled(&calls, "a");
    let other = labelled(&calls, "b");
    bus.register(Scope::Global, EventKind::SERVER_CHANNEL_NAME, &listener);
    bus.register(Scope::Global, EventKind::SERVER_CHANNEL_POSITION, &listener);
    bus.register(Scope::Channel(ChannelId::new(TEXT)), EventKind::SERVER_CHANNEL_NAME, &listener);
    bus.register(Scope::Global, EventKind::SERVER_CHANNEL_NAME, &other);

    assert_eq!(bus.unregister_everywhere(listener.id()), 3);

    bus.publish(&rename_event(), &text_chain());
    assert_eq!(calls.snapshot(), vec!["b"]);
}

/// Tests a listener that registers another listener while being dispatched.
///
/// Verifies that no registry lock is held during dispatch and that the new
/// listener takes effect from the next event on.
///
/// Expected: added listener not invoked for the current event, invoked for the next
#[test]
fn listener_may_register_during_dispatch() {
    let bus = Arc::new(EventBus::new());
    let calls = Recorder::new();
    let kind = EventKind::SERVER_CHANNEL_NAME;
    let late = labelled(&calls, "late");

    let registrar_bus = bus.clone();
    let sink = calls.clone();
    bus.register(
        Scope::Global,
        kind,
        &Listener::infallible(move |_| {
            sink.push("registrar");
            registrar_bus.register(Scope::Global, kind, &late);
        }),
    );

    bus.publish(&rename_event(), &text_chain());
    assert_eq!(calls.take(), vec!["registrar"]);

    bus.publish(&rename_event(), &text_chain());
    assert_eq!(calls.take(), vec!["registrar", "late"]);
}
