//! Derived Views
//!
//! Display orderings computed from the stored sequences. None of these
//! change what is stored.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::{Client, InventoryItem, QueueEntry};

/// Clients newest date first.
///
/// The sort is stable, so clients sharing a date keep their stored order
/// (most recently added first). Unparseable dates go last.
pub fn clients_by_date_desc(clients: &[Client]) -> Vec<&Client> {
    let mut sorted: Vec<&Client> = clients.iter().collect();
    sorted.sort_by(|a, b| b.service_date().cmp(&a.service_date()));
    sorted
}

/// Low-stock items first, then by name
pub fn inventory_display_order(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut sorted: Vec<&InventoryItem> = items.iter().collect();
    sorted.sort_by(|a, b| {
        b.is_low_stock()
            .cmp(&a.is_low_stock())
            .then_with(|| compare_names(&a.name, &b.name))
    });
    sorted
}

/// The queue is shown exactly as stored
pub fn queue_display_order(entries: &[QueueEntry]) -> Vec<&QueueEntry> {
    entries.iter().collect()
}

pub fn served_count(clients: &[Client]) -> usize {
    clients.iter().filter(|c| c.served).count()
}

pub fn low_stock_count(items: &[InventoryItem]) -> usize {
    items.iter().filter(|i| i.is_low_stock()).count()
}

/// Accent- and case-insensitive comparison, with the raw text as tie-break
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b)).then_with(|| a.cmp(b))
}

/// Sort key: decomposed, combining marks dropped, lowercased
pub fn collation_key(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
