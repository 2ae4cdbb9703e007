//! Mutable cached fields with atomic compare-and-replace.
//!
//! Every mutable attribute of a cached entity lives in a [`Field`]. Readers take a
//! clone of the current value. The update handlers are the only writers: they call
//! [`Field::replace_if_changed`], which compares and writes under a single write lock
//! so two updates racing on the same field cannot interleave between the comparison
//! and the store. The last applied update wins.

use parking_lot::RwLock;

/// Old and new value of a field that actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    pub old: T,
    pub new: T,
}

impl<T: PartialEq> Change<T> {
    /// Compares a cached value against a newly observed one.
    ///
    /// Returns `None` when the values are equal, so no-op updates never produce a
    /// change.
    pub fn between(old: T, new: T) -> Option<Self> {
        (old != new).then_some(Self { old, new })
    }
}

/// Cached field of an entity.
#[derive(Debug, Default)]
pub struct Field<T> {
    value: RwLock<T>,
}

impl<T: Clone + PartialEq> Field<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Current value of the field.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Stores `new` if it differs from the cached value.
    ///
    /// # Returns
    /// - `Some(Change)` - The field was updated; carries the previous and stored value
    /// - `None` - The cached value already equals `new`; nothing was written
    pub(crate) fn replace_if_changed(&self, new: T) -> Option<Change<T>> {
        let mut slot = self.value.write();
        let change = Change::between(slot.clone(), new)?;
        *slot = change.new.clone();
        Some(change)
    }

    /// Stores `new` and reports a change if its projection through `key` differs
    /// from the cached value's.
    ///
    /// Used for fields whose stored representation is not what identity is decided
    /// on, such as a parent id that may point at an entity no longer in the cache.
    /// `new` is written even when the projections match, so a stale representation is
    /// replaced silently. The projection is evaluated while the write lock is held.
    pub(crate) fn replace_if_changed_by<K, F>(&self, new: T, key: F) -> Option<Change<K>>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut slot = self.value.write();
        let change = Change::between(key(&slot), key(&new));
        *slot = new;
        change
    }
}

#[cfg(test)]
mod test;
