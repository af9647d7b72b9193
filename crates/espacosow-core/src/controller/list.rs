//! Generic List Controller
//!
//! Validates form input, builds records and applies structural changes to
//! a [`PersistentList`]. Every successful operation writes exactly once.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clock::{next_id, Clock, SystemClock};
use crate::domain::{DomainError, DomainResult, Entity};
use crate::repository::{KeyValueStore, PersistentList};

/// Where `create` puts a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Newest first
    Prepend,
    /// Oldest first
    Append,
}

/// A record type a [`ListController`] can manage
pub trait Record: Entity + Serialize + DeserializeOwned {
    /// Raw form input
    type Form;
    /// Partial update
    type Patch;

    const PLACEMENT: Placement;

    fn validate(form: &Self::Form) -> DomainResult<()>;

    /// Build a record that will sit at 1-based `position` once inserted
    fn build(id: String, clock: &dyn Clock, form: &Self::Form, position: u32) -> DomainResult<Self>;

    fn apply(&mut self, patch: &Self::Patch) -> DomainResult<()>;

    /// Restamp position-dependent fields after a structural change
    fn renumber(_items: &mut [Self]) {}
}

pub struct ListController<T, S> {
    list: PersistentList<T, S>,
    clock: Rc<dyn Clock>,
}

impl<T, S> ListController<T, S>
where
    T: Record,
    S: KeyValueStore,
{
    pub fn open(store: S, key: impl Into<String>) -> Self {
        Self::with_clock(store, key, Rc::new(SystemClock))
    }

    pub fn with_clock(store: S, key: impl Into<String>, clock: Rc<dyn Clock>) -> Self {
        let mut list = PersistentList::open(store, key);
        // Stored positions are not trusted
        list.repair(|items| T::renumber(items));
        Self { list, clock }
    }

    pub fn key(&self) -> &str {
        self.list.key()
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.list.items().iter().find(|r| r.id() == id)
    }

    pub fn validate(&self, form: &T::Form) -> DomainResult<()> {
        T::validate(form)
    }

    /// Validate `form`, build a record with a fresh ID and insert it.
    ///
    /// On invalid input the list is left unchanged.
    pub fn create(&mut self, form: &T::Form) -> DomainResult<T> {
        T::validate(form)?;

        let id = next_id(&*self.clock, self.list.items().iter().map(|r| r.id()));
        let position = match T::PLACEMENT {
            Placement::Prepend => 1,
            Placement::Append => self.list.len() as u32 + 1,
        };
        let record = T::build(id.clone(), &*self.clock, form, position)?;

        self.list.mutate(move |items| {
            match T::PLACEMENT {
                Placement::Prepend => items.insert(0, record),
                Placement::Append => items.push(record),
            }
            T::renumber(items);
            Ok(())
        })?;

        log::debug!("[{}] created {}", self.list.key(), id);
        self.find(&id).cloned().ok_or_else(|| DomainError::not_found(&id))
    }

    /// Apply `patch` to the record with `id`
    pub fn update(&mut self, id: &str, patch: &T::Patch) -> DomainResult<T> {
        let updated = self.list.mutate(|items| {
            let record = items
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or_else(|| DomainError::not_found(id))?;
            record.apply(patch)?;
            Ok(record.clone())
        })?;
        log::debug!("[{}] updated {}", self.list.key(), id);
        Ok(updated)
    }

    /// Remove the record with `id`, renumbering what is left
    pub fn remove(&mut self, id: &str) -> DomainResult<T> {
        let removed = self.list.mutate(|items| {
            let index = items
                .iter()
                .position(|r| r.id() == id)
                .ok_or_else(|| DomainError::not_found(id))?;
            let removed = items.remove(index);
            T::renumber(items);
            Ok(removed)
        })?;
        log::debug!("[{}] removed {}", self.list.key(), id);
        Ok(removed)
    }

    pub fn clear(&mut self) -> DomainResult<()> {
        self.list.replace(Vec::new())
    }

    pub(crate) fn list_mut(&mut self) -> &mut PersistentList<T, S> {
        &mut self.list
    }
}
