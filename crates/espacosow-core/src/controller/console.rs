//! Console
//!
//! The four feature controllers, opened together at startup. Each one owns
//! its own slot; nothing is shared between them except the store handle.

use std::rc::Rc;

use crate::clock::{Clock, SystemClock};
use crate::config::{FeatureArea, StorageConfig};
use crate::repository::KeyValueStore;

use super::{ClientList, ConsumableLog, Inventory, ListController, Queue};

pub struct Console<S> {
    pub clients: ClientList<S>,
    pub consumables: ConsumableLog<S>,
    pub queue: Queue<S>,
    pub inventory: Inventory<S>,
}

impl<S: KeyValueStore + Clone> Console<S> {
    pub fn open(store: S, config: &StorageConfig) -> Self {
        Self::with_clock(store, config, Rc::new(SystemClock))
    }

    pub fn with_clock(store: S, config: &StorageConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            clients: ListController::with_clock(store.clone(), config.key(FeatureArea::Clients), clock.clone()),
            consumables: ListController::with_clock(
                store.clone(),
                config.key(FeatureArea::ConsumableLog),
                clock.clone(),
            ),
            queue: ListController::with_clock(store.clone(), config.key(FeatureArea::Queue), clock.clone()),
            inventory: ListController::with_clock(store, config.key(FeatureArea::Inventory), clock),
        }
    }
}
