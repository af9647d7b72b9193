//! Persistent List
//!
//! Binds an in-memory ordered sequence of records to one key-value slot.
//! The slot is read once on open and rewritten on every change.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

pub struct PersistentList<T, S> {
    store: S,
    key: String,
    items: Vec<T>,
}

impl<T, S> PersistentList<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore,
{
    /// Open a slot, starting empty when it is absent or unreadable
    pub fn open(store: S, key: impl Into<String>) -> Self {
        Self::open_or(store, key, Vec::new())
    }

    /// Open a slot, falling back to `default` when it is absent or unreadable.
    ///
    /// Malformed content is logged and otherwise ignored; the slot is left
    /// as it was until the next write replaces it.
    pub fn open_or(store: S, key: impl Into<String>, default: Vec<T>) -> Self {
        let key = key.into();
        let items = match store.get(&key) {
            Ok(Some(raw)) => match decode(&raw) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("[{}] {}, starting from default", key, e);
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                log::warn!("[{}] {}, starting from default", key, e);
                default
            }
        };
        log::info!("[{}] opened with {} records", key, items.len());
        Self { store, key, items }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the whole sequence and persist it.
    ///
    /// The in-memory sequence only changes once the store accepted the write.
    pub fn replace(&mut self, items: Vec<T>) -> DomainResult<()> {
        let encoded = encode(&items)?;
        self.store.set(&self.key, &encoded)?;
        self.items = items;
        log::debug!("[{}] wrote {} records", self.key, self.items.len());
        Ok(())
    }

    /// Run `f` on a working copy and persist the result as one step.
    ///
    /// If `f` fails or the write fails, nothing changes.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> DomainResult<R>) -> DomainResult<R> {
        let mut working = self.items.clone();
        let result = f(&mut working)?;
        self.replace(working)?;
        Ok(result)
    }

    /// Adjust the in-memory sequence without writing
    pub(crate) fn repair(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        f(&mut self.items);
    }
}

fn encode<T: Serialize>(items: &[T]) -> DomainResult<String> {
    serde_json::to_string(items).map_err(|e| DomainError::Storage(format!("Failed to encode: {}", e)))
}

fn decode<T: DeserializeOwned>(raw: &str) -> DomainResult<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| DomainError::MalformedState(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            text: format!("note {}", id),
        }
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> DomainResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> DomainResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_absent_slot_uses_default() {
        let list: PersistentList<Note, _> = PersistentList::open_or(MemoryStore::new(), "notes", vec![note("a")]);
        assert_eq!(list.items(), &[note("a")]);
    }

    #[test]
    fn test_malformed_slot_falls_back() {
        let store = MemoryStore::new();
        store.set("notes", "{not json").unwrap();
        let list: PersistentList<Note, _> = PersistentList::open(store.clone(), "notes");
        assert!(list.is_empty());
        // Left untouched until the next write
        assert_eq!(store.get("notes").unwrap(), Some("{not json".to_string()));
    }

    #[test]
    fn test_incompatible_shape_falls_back() {
        let store = MemoryStore::new();
        store.set("notes", r#"{"id":"1"}"#).unwrap();
        let list: PersistentList<Note, _> = PersistentList::open(store, "notes");
        assert!(list.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let mut list = PersistentList::open(store.clone(), "notes");
        list.replace(vec![note("a"), note("b")]).unwrap();

        let reopened: PersistentList<Note, _> = PersistentList::open(store, "notes");
        assert_eq!(reopened.items(), &[note("a"), note("b")]);
    }

    #[test]
    fn test_write_is_idempotent() {
        let store = MemoryStore::new();
        let mut list = PersistentList::open(store.clone(), "notes");
        list.replace(vec![note("a")]).unwrap();
        let first = store.get("notes").unwrap();
        list.replace(vec![note("a")]).unwrap();
        assert_eq!(store.get("notes").unwrap(), first);
    }

    #[test]
    fn test_failed_write_keeps_memory() {
        let mut list = PersistentList::open_or(ReadOnlyStore, "notes", vec![note("a")]);
        let result = list.mutate(|items| {
            items.clear();
            Ok(())
        });
        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert_eq!(list.items(), &[note("a")]);
    }

    #[test]
    fn test_failed_mutation_does_not_write() {
        let store = MemoryStore::new();
        let mut list = PersistentList::open(store.clone(), "notes");
        list.replace(vec![note("a")]).unwrap();
        let result: DomainResult<()> = list.mutate(|items| {
            items.push(note("b"));
            Err(DomainError::not_found("x"))
        });
        assert!(result.is_err());
        assert_eq!(list.len(), 1);
        assert_eq!(store.get("notes").unwrap(), Some(r#"[{"id":"a","text":"note a"}]"#.to_string()));
    }
}
