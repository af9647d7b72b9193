//! Toast Host Component
//!
//! Renders the current toast at the top of the page.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Warning => "toast toast-warning",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss()>
                    {toast.text}
                </div>
            }
        })}
    }
}
