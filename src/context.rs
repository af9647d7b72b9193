//! Application Context
//!
//! Shared state provided via Leptos Context API: one signal per feature
//! controller plus the toast slot.

use espacosow_core::{ClientList, Console, ConsumableLog, DomainError, Inventory, Queue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::storage::BrowserStorage;

const TOAST_MS: u32 = 2500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// App-wide controllers and notifications provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub clients: RwSignal<ClientList<BrowserStorage>, LocalStorage>,
    pub consumables: RwSignal<ConsumableLog<BrowserStorage>, LocalStorage>,
    pub queue: RwSignal<Queue<BrowserStorage>, LocalStorage>,
    pub inventory: RwSignal<Inventory<BrowserStorage>, LocalStorage>,
    /// Toast currently shown - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Toast currently shown - write
    set_toast: WriteSignal<Option<Toast>>,
    toast_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(console: Console<BrowserStorage>) -> Self {
        let (toast, set_toast) = signal(None);
        Self {
            clients: RwSignal::new_local(console.clients),
            consumables: RwSignal::new_local(console.consumables),
            queue: RwSignal::new_local(console.queue),
            inventory: RwSignal::new_local(console.inventory),
            toast,
            set_toast,
            toast_seq: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(ToastKind::Success, text.into());
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.notify(ToastKind::Warning, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(ToastKind::Error, text.into());
    }

    /// Surface a failed operation. `missing` is the page's prompt for
    /// unfilled required fields; unknown IDs are ignored.
    pub fn report(&self, err: &DomainError, missing: &str) {
        match err {
            DomainError::MissingRequiredField(_) => self.error(missing),
            DomainError::NotFound(id) => log::debug!("ignoring stale id {}", id),
            DomainError::MalformedState(_) | DomainError::Storage(_) => {
                log::error!("{}", err);
                self.error("Não foi possível salvar. Tente novamente.");
            }
        }
    }

    pub fn dismiss(&self) {
        self.set_toast.set(None);
    }

    fn notify(&self, kind: ToastKind, text: String) {
        let id = self.toast_seq.try_update(|seq| {
            *seq += 1;
            *seq
        });
        let Some(id) = id else {
            return;
        };
        self.set_toast.set(Some(Toast { id, kind, text }));

        let set_toast = self.set_toast;
        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            // A newer toast keeps its own timer
            if toast.get_untracked().map(|t| t.id) == Some(id) {
                set_toast.set(None);
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
