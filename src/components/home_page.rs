//! Home Page Component
//!
//! Menu of the four feature areas.

use leptos::prelude::*;

use crate::app::Page;

/// (page, title, description)
const MENU_ITEMS: &[(Page, &str, &str)] = &[
    (Page::Clients, "Clientes Novos", "Rotação de atendimentos"),
    (Page::ConsumableLog, "Cetim", "Controle de uso"),
    (Page::Queue, "Depilação", "Ordem de atendimento"),
    (Page::Inventory, "Estoque", "Controle de produtos"),
];

#[component]
pub fn HomePage(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <div class="home">
            <header class="home-header">
                <h1 class="app-title">"Espaço Sow"</h1>
                <p class="app-subtitle">"Alphaville"</p>
            </header>

            <main class="menu-grid">
                {MENU_ITEMS.iter().map(|(page, title, description)| {
                    let page = *page;
                    view! {
                        <button
                            class=format!("menu-card menu-{}", page.slug())
                            on:click=move |_| set_page.set(page)
                        >
                            <h2>{*title}</h2>
                            <p>{*description}</p>
                        </button>
                    }
                }).collect_view()}
            </main>

            <footer class="home-footer">
                <p>"Sistema interno de gestão"</p>
            </footer>
        </div>
    }
}
