//! Scope-keyed listener registries.
//!
//! The [`EventBus`] owns every listener registration of the client. Registrations are
//! keyed by `(Scope, EventKind)` and keep insertion order within a key. Resolving an
//! event walks a [`ScopeChain`] and concatenates the registrations of each scope,
//! dropping listeners already seen earlier in the chain.

use std::collections::HashSet;

use dashmap::DashMap;

use crate::event::{
    ChangeEvent, DispatchReport, Dispatcher, EventKind, Listener, ListenerId, Scope, ScopeChain,
};

/// Listener registrations for every scope and event kind.
#[derive(Debug, Default)]
pub struct EventBus {
    registries: DashMap<(Scope, EventKind), Vec<Listener>>,
    dispatcher: Dispatcher,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `kind` events at `scope`.
    ///
    /// # Returns
    /// - `true` - The listener was added at the end of the scope's list
    /// - `false` - The same listener is already registered there
    pub fn register(&self, scope: Scope, kind: EventKind, listener: &Listener) -> bool {
        let mut listeners = self.registries.entry((scope, kind)).or_default();
        if listeners.iter().any(|l| l.id() == listener.id()) {
            return false;
        }
        listeners.push(listener.clone());
        true
    }

    /// Removes the listener with `id` from `kind` events at `scope`.
    ///
    /// # Returns
    /// - `true` - The listener was registered there and has been removed
    /// - `false` - Nothing was registered under that id
    pub fn unregister(&self, scope: Scope, kind: EventKind, id: ListenerId) -> bool {
        let key = (scope, kind);
        let removed = match self.registries.get_mut(&key) {
            Some(mut listeners) => {
                let before = listeners.len();
                listeners.retain(|l| l.id() != id);
                listeners.len() != before
            }
            None => false,
        };
        self.registries.remove_if(&key, |_, listeners| listeners.is_empty());
        removed
    }

    /// Removes the listener with `id` from every scope and kind.
    ///
    /// # Returns
    /// - Number of registrations removed
    pub fn unregister_everywhere(&self, id: ListenerId) -> usize {
        let mut removed = 0;
        for mut entry in self.registries.iter_mut() {
            let before = entry.value().len();
            entry.value_mut().retain(|l| l.id() != id);
            removed += before - entry.value().len();
        }
        self.registries.retain(|_, listeners| !listeners.is_empty());
        removed
    }

    /// Listeners registered for `kind` at exactly `scope`, in registration order.
    pub fn listeners(&self, scope: Scope, kind: EventKind) -> Vec<Listener> {
        self.registries
            .get(&(scope, kind))
            .map(|listeners| listeners.value().clone())
            .unwrap_or_default()
    }

    /// Ordered, de-duplicated union of the listeners for `kind` along `chain`.
    ///
    /// A listener registered at several scopes of the chain appears once, at the
    /// position of the first scope it was found in.
    pub fn resolve(&self, kind: EventKind, chain: &ScopeChain) -> Vec<Listener> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();

        for scope in chain.scopes() {
            let Some(listeners) = self.registries.get(&(*scope, kind)) else {
                continue;
            };
            resolved.extend(
                listeners
                    .iter()
                    .filter(|listener| seen.insert(listener.id()))
                    .cloned(),
            );
        }

        resolved
    }

    /// Resolves the listeners for `event` along `chain` and invokes them.
    ///
    /// No registry lock is held while listeners run, so a listener may register or
    /// unregister listeners itself; such changes apply from the next event on.
    pub fn publish(&self, event: &ChangeEvent, chain: &ScopeChain) -> DispatchReport {
        let listeners = self.resolve(event.kind(), chain);
        tracing::trace!(
            "Dispatching {:?} for channel {} to {} listener(s)",
            event.kind(),
            event.channel_id(),
            listeners.len()
        );
        self.dispatcher.dispatch(event, &listeners)
    }
}
