//! Client List Operations

use crate::clock::Clock;
use crate::domain::{Client, ClientForm, ClientPatch, DomainError, DomainResult};
use crate::repository::KeyValueStore;
use crate::views;

use super::list::{ListController, Placement, Record};

impl Record for Client {
    type Form = ClientForm;
    type Patch = ClientPatch;

    const PLACEMENT: Placement = Placement::Prepend;

    fn validate(form: &ClientForm) -> DomainResult<()> {
        form.validate()
    }

    fn build(id: String, clock: &dyn Clock, form: &ClientForm, _position: u32) -> DomainResult<Self> {
        Client::create(id, clock.now(), form, clock.today())
    }

    fn apply(&mut self, patch: &ClientPatch) -> DomainResult<()> {
        Client::apply(self, patch)
    }
}

pub trait ClientOperations {
    /// Flip `served` on one client, leaving every other field alone
    fn toggle_served(&mut self, id: &str) -> DomainResult<Client>;

    fn served_count(&self) -> usize;
}

impl<S: KeyValueStore> ClientOperations for ListController<Client, S> {
    fn toggle_served(&mut self, id: &str) -> DomainResult<Client> {
        let served = self
            .find(id)
            .map(|c| c.served)
            .ok_or_else(|| DomainError::not_found(id))?;
        self.update(
            id,
            &ClientPatch {
                served: Some(!served),
                ..Default::default()
            },
        )
    }

    fn served_count(&self) -> usize {
        views::served_count(self.items())
    }
}
