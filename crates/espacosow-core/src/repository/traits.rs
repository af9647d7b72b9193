//! Repository Layer - Core Traits
//!
//! Defines the abstract interface to durable key-value storage.
//! Implementations can use browser localStorage, files, in-memory, etc.

use crate::domain::DomainResult;

/// A flat namespace of string slots.
///
/// Access is single-threaded: every call runs to completion before the
/// next one starts, so implementations need no locking.
pub trait KeyValueStore {
    /// Read a slot; `Ok(None)` when the slot has never been written
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace a slot's contents
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete a slot; removing an absent slot is not an error
    fn remove(&self, key: &str) -> DomainResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }
}
