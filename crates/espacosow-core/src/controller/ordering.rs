//! Queue Ordering Operations
//!
//! The queue keeps `order` equal to each entry's 1-based list position.

use crate::clock::Clock;
use crate::domain::{DomainError, DomainResult, QueueEntry, QueueForm, QueuePatch};
use crate::repository::KeyValueStore;

use super::list::{ListController, Placement, Record};

/// Which neighbour to swap with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Restamp `order` as 1..N from sequence position.
///
/// Stored `order` values are ignored; only the sequence counts.
pub fn renormalize_order(entries: &mut [QueueEntry]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.order = index as u32 + 1;
    }
}

impl Record for QueueEntry {
    type Form = QueueForm;
    type Patch = QueuePatch;

    const PLACEMENT: Placement = Placement::Append;

    fn validate(form: &QueueForm) -> DomainResult<()> {
        form.validate()
    }

    fn build(id: String, clock: &dyn Clock, form: &QueueForm, position: u32) -> DomainResult<Self> {
        QueueEntry::create(id, clock.now(), form, clock.today(), position)
    }

    fn apply(&mut self, patch: &QueuePatch) -> DomainResult<()> {
        QueueEntry::apply(self, patch)
    }

    fn renumber(items: &mut [Self]) {
        renormalize_order(items);
    }
}

/// Trait for queue positioning operations
pub trait QueueOperations {
    /// Swap the entry with its neighbour in `direction`.
    ///
    /// Returns `Ok(false)` without writing when the entry is already at
    /// that end of the queue.
    fn reorder(&mut self, id: &str, direction: Direction) -> DomainResult<bool>;

    /// The entry to be served next
    fn next_up(&self) -> Option<&QueueEntry>;
}

impl<S: KeyValueStore> QueueOperations for ListController<QueueEntry, S> {
    fn reorder(&mut self, id: &str, direction: Direction) -> DomainResult<bool> {
        let index = self
            .items()
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DomainError::not_found(id))?;

        let neighbour = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|n| *n < self.len()),
        };
        let Some(neighbour) = neighbour else {
            return Ok(false);
        };

        self.list_mut().mutate(|entries| {
            entries.swap(index, neighbour);
            renormalize_order(entries);
            Ok(())
        })?;
        log::debug!("[{}] moved {} {:?}", self.key(), id, direction);
        Ok(true)
    }

    fn next_up(&self) -> Option<&QueueEntry> {
        self.items().first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: &str, order: u32) -> QueueEntry {
        QueueEntry {
            id: id.to_string(),
            name: id.to_string(),
            depilation_type: "Virilha".to_string(),
            professional: None,
            date: "2024-05-01".to_string(),
            order,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_renormalize_repairs_gaps_and_duplicates() {
        let mut entries = vec![entry("a", 7), entry("b", 7), entry("c", 0)];
        renormalize_order(&mut entries);
        let orders: Vec<u32> = entries.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_renormalize_empty() {
        let mut entries: Vec<QueueEntry> = Vec::new();
        renormalize_order(&mut entries);
        assert!(entries.is_empty());
    }
}
