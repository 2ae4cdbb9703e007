use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::ListenerError;
use crate::event::ChangeEvent;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

type Callback = dyn Fn(&ChangeEvent) -> Result<(), ListenerError> + Send + Sync;

/// Cloneable handle to a change-event callback.
///
/// Clones share the same [`ListenerId`], so registering one listener at several
/// scopes still makes it a single listener when an event is resolved across those
/// scopes.
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    callback: Arc<Callback>,
}

impl Listener {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&ChangeEvent) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self {
            id: ListenerId::next(),
            callback: Arc::new(callback),
        }
    }

    /// Listener that cannot fail.
    pub fn infallible<F>(callback: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        Self::new(move |event| {
            callback(event);
            Ok(())
        })
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub(crate) fn call(&self, event: &ChangeEvent) -> Result<(), ListenerError> {
        (self.callback)(event)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("id", &self.id).finish()
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Listener {}
