//! Inventory Page Component
//!
//! Product stock with quick +/- adjustments, inline edit and a low-stock
//! banner.

use espacosow_core::domain::{InventoryForm, InventoryItem};
use espacosow_core::{views, InventoryOperations};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, PageHeader};
use crate::context::use_app_context;
use crate::format::low_stock_banner;

#[component]
pub fn InventoryPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (show_form, set_show_form) = signal(false);
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (min_quantity, set_min_quantity) = signal(String::new());

    // Id of the row in edit mode and its working copy
    let editing = RwSignal::new(None::<String>);
    let edit_form = RwSignal::new(InventoryForm::default());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = InventoryForm {
            name: name.get_untracked(),
            quantity: quantity.get_untracked(),
            min_quantity: min_quantity.get_untracked(),
        };
        match ctx.inventory.try_update(|inventory| inventory.create(&form)) {
            Some(Ok(_)) => {
                set_name.set(String::new());
                set_quantity.set(String::new());
                set_min_quantity.set(String::new());
                set_show_form.set(false);
                ctx.success("Produto adicionado!");
            }
            Some(Err(e)) => ctx.report(&e, "Preencha o nome do produto"),
            None => {}
        }
    };

    let banner = move || ctx.inventory.with(|inventory| low_stock_banner(inventory.low_stock_count()));
    let has_low_stock = move || banner().is_some();

    let items = move || {
        ctx.inventory.with(|inventory| {
            views::inventory_display_order(inventory.items())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page page-inventory">
            <PageHeader title="Estoque" subtitle="Controle de produtos" on_back=on_back />

            <Show when=has_low_stock>
                <div class="low-stock-banner" role="alert">
                    {move || banner().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || show_form.get()
                fallback=move || view! {
                    <section class="list">
                        {move || {
                            let items = items();
                            if items.is_empty() {
                                view! { <p class="empty-state">"Nenhum produto cadastrado"</p> }.into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|item| view! { <InventoryRow item=item editing=editing edit_form=edit_form /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </section>
                    <button class="fab" title="Adicionar produto" on:click=move |_| set_show_form.set(true)>
                        "+"
                    </button>
                }
            >
                <form class="record-form" on:submit=create_item>
                    <label>
                        "Nome do Produto *"
                        <input
                            type="text"
                            placeholder="Ex: Shampoo, Cera..."
                            autocomplete="off"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Quantidade Atual"
                        <input
                            type="number"
                            min="0"
                            placeholder="0"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Quantidade Mínima"
                        <input
                            type="number"
                            min="0"
                            placeholder="0"
                            prop:value=move || min_quantity.get()
                            on:input=move |ev| set_min_quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <p class="form-hint">
                        "* Alerta será exibido quando a quantidade atual for igual ou menor que a mínima"
                    </p>
                    <div class="form-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| set_show_form.set(false)>
                            "Cancelar"
                        </button>
                        <button type="submit" class="primary-btn">"Adicionar"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// One product row; swaps to an inline form while being edited
#[component]
fn InventoryRow(
    item: InventoryItem,
    editing: RwSignal<Option<String>>,
    edit_form: RwSignal<InventoryForm>,
) -> impl IntoView {
    let ctx = use_app_context();

    let adjust = move |id: &str, delta: i64| {
        match ctx.inventory.try_update(|inventory| inventory.adjust_quantity(id, delta)) {
            Some(Ok(adjustment)) if adjustment.low_stock => {
                ctx.warning(format!("Estoque baixo: {}!", adjustment.item.name));
            }
            Some(Ok(_)) | None => {}
            Some(Err(e)) => ctx.report(&e, ""),
        }
    };

    let is_editing = {
        let id = item.id.clone();
        move || editing.with(|current| current.as_deref() == Some(id.as_str()))
    };

    let start_edit = {
        let form = InventoryForm::from_item(&item);
        let id = item.id.clone();
        move |_| {
            edit_form.set(form.clone());
            editing.set(Some(id.clone()));
        }
    };

    let save_edit = {
        let id = item.id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let form = edit_form.get_untracked();
            match ctx.inventory.try_update(|inventory| inventory.edit(&id, &form)) {
                Some(Ok(_)) => {
                    editing.set(None);
                    ctx.success("Produto atualizado!");
                }
                Some(Err(e)) => ctx.report(&e, "Preencha o nome do produto"),
                None => {}
            }
        }
    };

    let remove_id = item.id.clone();
    let remove_item = move |_: ()| {
        match ctx.inventory.try_update(|inventory| inventory.remove(&remove_id)) {
            Some(Ok(_)) => ctx.success("Produto removido!"),
            Some(Err(e)) => ctx.report(&e, ""),
            None => {}
        }
    };

    let minus_id = item.id.clone();
    let plus_id = item.id.clone();
    let row_class = if item.is_low_stock() { "record-row inventory-row low-stock" } else { "record-row inventory-row" };

    view! {
        <Show
            when=is_editing
            fallback=move || view! {
                <article class=row_class>
                    <div class="record-info">
                        <h3 class="record-title">
                            {item.name.clone()}
                            {item.is_low_stock().then(|| view! { <span class="badge badge-warning">"⚠"</span> })}
                        </h3>
                        <p class="record-meta">{format!("Mínimo: {}", item.min_quantity)}</p>
                    </div>
                    <div class="stepper">
                        <button
                            class="step-btn"
                            title="Diminuir"
                            on:click={
                                let id = minus_id.clone();
                                move |_| adjust(&id, -1)
                            }
                        >
                            "−"
                        </button>
                        <span class="stepper-value">{item.quantity}</span>
                        <button
                            class="step-btn"
                            title="Aumentar"
                            on:click={
                                let id = plus_id.clone();
                                move |_| adjust(&id, 1)
                            }
                        >
                            "+"
                        </button>
                    </div>
                    <button class="icon-btn" title="Editar" on:click=start_edit.clone()>"✎"</button>
                    <DeleteConfirmButton label="Remover produto" on_confirm=remove_item.clone() />
                </article>
            }
        >
            <form class="record-row inventory-row editing" on:submit=save_edit.clone()>
                <input
                    type="text"
                    autocomplete="off"
                    prop:value=move || edit_form.with(|f| f.name.clone())
                    on:input=move |ev| edit_form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    prop:value=move || edit_form.with(|f| f.quantity.clone())
                    on:input=move |ev| edit_form.update(|f| f.quantity = event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    prop:value=move || edit_form.with(|f| f.min_quantity.clone())
                    on:input=move |ev| edit_form.update(|f| f.min_quantity = event_target_value(&ev))
                />
                <div class="form-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| editing.set(None)>
                        "Cancelar"
                    </button>
                    <button type="submit" class="primary-btn">"Salvar"</button>
                </div>
            </form>
        </Show>
    }
}
