//! Page Header Component
//!
//! Back button, page title and a short subtitle.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <button class="back-btn" title="Voltar" on:click=move |_| on_back.run(())>
                "←"
            </button>
            <div class="page-title">
                <h1>{title}</h1>
                <p class="page-subtitle">{subtitle}</p>
            </div>
        </header>
    }
}
