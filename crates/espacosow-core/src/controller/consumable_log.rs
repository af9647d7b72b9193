//! Consumable Log
//!
//! Newest entry first; no operations beyond the common ones.

use crate::clock::Clock;
use crate::domain::{ConsumableForm, ConsumableLogEntry, ConsumablePatch, DomainResult};

use super::list::{Placement, Record};

impl Record for ConsumableLogEntry {
    type Form = ConsumableForm;
    type Patch = ConsumablePatch;

    const PLACEMENT: Placement = Placement::Prepend;

    fn validate(form: &ConsumableForm) -> DomainResult<()> {
        form.validate()
    }

    fn build(id: String, clock: &dyn Clock, form: &ConsumableForm, _position: u32) -> DomainResult<Self> {
        ConsumableLogEntry::create(id, clock.now(), form, clock.today())
    }

    fn apply(&mut self, patch: &ConsumablePatch) -> DomainResult<()> {
        ConsumableLogEntry::apply(self, patch)
    }
}
