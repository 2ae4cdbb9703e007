//! Capture of values observed inside listener callbacks.

use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable, thread-safe log of recorded values.
///
/// Clones share the same log, so a clone can be moved into a listener closure while
/// the test keeps the original for assertions.
///
/// # Example
///
/// ```rust
/// use test_utils::recorder::Recorder;
///
/// let recorder = Recorder::new();
/// let sink = recorder.clone();
/// std::thread::spawn(move || sink.push("renamed")).join().unwrap();
///
/// assert_eq!(recorder.snapshot(), vec!["renamed"]);
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a value to the log.
    pub fn push(&self, value: T) {
        self.values.lock().push(value);
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Drains the log, returning everything recorded so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock())
    }
}

impl<T: Clone> Recorder<T> {
    /// Copy of everything recorded so far, in recording order.
    pub fn snapshot(&self) -> Vec<T> {
        self.values.lock().clone()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
