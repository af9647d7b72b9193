//! Consumable Log Page Component
//!
//! Satin cap usage history, newest first.

use espacosow_core::domain::{ConsumableForm, ConsumableLogEntry};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, PageHeader};
use crate::context::use_app_context;
use crate::format::{count_label, short_date, time_of_day, today_input};

#[component]
pub fn ConsumableLogPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (show_form, set_show_form) = signal(false);
    let (professional, set_professional) = signal(String::new());
    let (date, set_date) = signal(today_input());
    let (notes, set_notes) = signal(String::new());

    let create_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ConsumableForm {
            professional: professional.get_untracked(),
            date: date.get_untracked(),
            notes: notes.get_untracked(),
        };
        match ctx.consumables.try_update(|log| log.create(&form)) {
            Some(Ok(_)) => {
                set_professional.set(String::new());
                set_date.set(today_input());
                set_notes.set(String::new());
                set_show_form.set(false);
                ctx.success("Uso de cetim registrado!");
            }
            Some(Err(e)) => ctx.report(&e, "Informe o profissional responsável"),
            None => {}
        }
    };

    let entries = move || ctx.consumables.with(|log| log.items().to_vec());

    view! {
        <div class="page page-consumables">
            <PageHeader title="Cetim" subtitle="Controle de uso" on_back=on_back />

            <Show
                when=move || show_form.get()
                fallback=move || view! {
                    <section class="list">
                        <div class="list-header">
                            <h2>"Histórico de Uso"</h2>
                            <span class="list-count">
                                {move || ctx.consumables.with(|log| count_label(log.len(), "registro", "registros"))}
                            </span>
                        </div>
                        {move || {
                            let entries = entries();
                            if entries.is_empty() {
                                view! { <p class="empty-state">"Nenhum registro de cetim"</p> }.into_any()
                            } else {
                                entries
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, entry)| view! { <ConsumableRow entry=entry number=index + 1 /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </section>
                    <button class="fab" title="Registrar uso" on:click=move |_| set_show_form.set(true)>
                        "+"
                    </button>
                }
            >
                <form class="record-form" on:submit=create_entry>
                    <label>
                        "Profissional Responsável *"
                        <input
                            type="text"
                            placeholder="Nome do profissional"
                            autocomplete="off"
                            prop:value=move || professional.get()
                            on:input=move |ev| set_professional.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Data"
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Observações"
                        <textarea
                            placeholder="Observações opcionais..."
                            prop:value=move || notes.get()
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="form-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| set_show_form.set(false)>
                            "Cancelar"
                        </button>
                        <button type="submit" class="primary-btn">"Registrar"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn ConsumableRow(entry: ConsumableLogEntry, number: usize) -> impl IntoView {
    let ctx = use_app_context();

    let remove_id = entry.id.clone();
    let remove_entry = move |_: ()| {
        match ctx.consumables.try_update(|log| log.remove(&remove_id)) {
            Some(Ok(_)) => ctx.success("Registro removido!"),
            Some(Err(e)) => ctx.report(&e, ""),
            None => {}
        }
    };

    let when = format!("{} às {}", short_date(&entry.date), time_of_day(entry.created_at));
    let notes = entry.notes().map(str::to_string);

    view! {
        <article class="record-row consumable-row">
            <span class="record-number">{number}</span>
            <div class="record-info">
                <h3 class="record-title">{entry.professional.clone()}</h3>
                <p class="record-meta">{when}</p>
                {notes.map(|n| view! { <p class="record-notes">{n}</p> })}
            </div>
            <DeleteConfirmButton label="Remover registro" on_confirm=remove_entry />
        </article>
    }
}
