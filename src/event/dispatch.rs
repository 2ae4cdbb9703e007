//! Synchronous listener invocation with per-listener failure isolation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::event::{ChangeEvent, Listener};

/// Outcome of delivering one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Listeners that returned `Ok`.
    pub delivered: usize,
    /// Listeners that returned an error or panicked.
    pub failed: usize,
}

impl DispatchReport {
    pub fn invoked(&self) -> usize {
        self.delivered + self.failed
    }
}

/// Invokes listeners one after another on the calling thread.
///
/// A listener that returns an error or panics is logged and counted as failed; the
/// remaining listeners still run and the failure never reaches the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Delivers `event` to each listener in slice order.
    ///
    /// # Arguments
    /// - `event` - The change to report
    /// - `listeners` - Resolved listeners, already de-duplicated and ordered
    ///
    /// # Returns
    /// - `DispatchReport` - How many listeners succeeded and how many failed
    pub fn dispatch(&self, event: &ChangeEvent, listeners: &[Listener]) -> DispatchReport {
        let mut report = DispatchReport::default();

        for listener in listeners {
            match panic::catch_unwind(AssertUnwindSafe(|| listener.call(event))) {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(e)) => {
                    report.failed += 1;
                    tracing::warn!(
                        "Listener {} failed to handle {:?} for channel {}: {}",
                        listener.id().get(),
                        event.kind(),
                        event.channel_id(),
                        e
                    );
                }
                Err(payload) => {
                    report.failed += 1;
                    tracing::error!(
                        "Listener {} panicked while handling {:?} for channel {}: {}",
                        listener.id().get(),
                        event.kind(),
                        event.channel_id(),
                        panic_message(payload.as_ref())
                    );
                }
            }
        }

        report
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
