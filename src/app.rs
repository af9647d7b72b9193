//! Espaço Sow Frontend App
//!
//! Opens the four persisted lists, provides them via context and switches
//! between the home menu and the feature pages.

use espacosow_core::{Console, StorageConfig};
use leptos::prelude::*;

use crate::components::{ClientsPage, ConsumableLogPage, HomePage, InventoryPage, QueuePage, ToastHost};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

/// Screen currently shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Clients,
    ConsumableLog,
    Queue,
    Inventory,
}

impl Page {
    /// CSS-friendly identifier
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Clients => "clients",
            Page::ConsumableLog => "cetim",
            Page::Queue => "depilacao",
            Page::Inventory => "estoque",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = StorageConfig::default();
    let console = Console::open(BrowserStorage::new(), &config);
    log::info!(
        "[APP] Loaded {} clients, {} cetim entries, {} in queue, {} products",
        console.clients.len(),
        console.consumables.len(),
        console.queue.len(),
        console.inventory.len()
    );

    // Provide context to all children
    provide_context(AppContext::new(console));

    let (page, set_page) = signal(Page::Home);
    let back = Callback::new(move |_: ()| set_page.set(Page::Home));

    view! {
        <div class=move || format!("app-layout page-{}", page.get().slug())>
            {move || match page.get() {
                Page::Home => view! { <HomePage set_page=set_page /> }.into_any(),
                Page::Clients => view! { <ClientsPage on_back=back /> }.into_any(),
                Page::ConsumableLog => view! { <ConsumableLogPage on_back=back /> }.into_any(),
                Page::Queue => view! { <QueuePage on_back=back /> }.into_any(),
                Page::Inventory => view! { <InventoryPage on_back=back /> }.into_any(),
            }}
            <ToastHost />
        </div>
    }
}
