//! Queue Page Component
//!
//! Hair-removal service order. The head of the queue is highlighted and
//! entries can be nudged up or down one place at a time.

use espacosow_core::domain::{QueueEntry, QueueForm};
use espacosow_core::{Direction, QueueOperations};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, PageHeader};
use crate::context::use_app_context;
use crate::format::{day_month, today_input};

#[component]
pub fn QueuePage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (show_form, set_show_form) = signal(false);
    let (name, set_name) = signal(String::new());
    let (depilation_type, set_depilation_type) = signal(String::new());
    let (professional, set_professional) = signal(String::new());
    let (date, set_date) = signal(today_input());

    let create_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = QueueForm {
            name: name.get_untracked(),
            depilation_type: depilation_type.get_untracked(),
            professional: professional.get_untracked(),
            date: date.get_untracked(),
        };
        match ctx.queue.try_update(|queue| queue.create(&form)) {
            Some(Ok(_)) => {
                set_name.set(String::new());
                set_depilation_type.set(String::new());
                set_professional.set(String::new());
                set_date.set(today_input());
                set_show_form.set(false);
                ctx.success("Cliente adicionado à fila!");
            }
            Some(Err(e)) => ctx.report(&e, "Preencha nome e tipo de depilação"),
            None => {}
        }
    };

    let entries = move || ctx.queue.with(|queue| queue.items().to_vec());

    view! {
        <div class="page page-queue">
            <PageHeader title="Depilação" subtitle="Ordem de atendimento" on_back=on_back />

            <Show
                when=move || show_form.get()
                fallback=move || view! {
                    <section class="list">
                        <div class="list-header">
                            <h2>"Ordem de Atendimento"</h2>
                            <span class="list-count">
                                {move || ctx.queue.with(|queue| format!("{} na fila", queue.len()))}
                            </span>
                        </div>
                        {move || {
                            let entries = entries();
                            let last = entries.len().saturating_sub(1);
                            if entries.is_empty() {
                                view! { <p class="empty-state">"Nenhuma cliente na fila"</p> }.into_any()
                            } else {
                                entries
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, entry)| view! {
                                        <QueueRow entry=entry is_first=index == 0 is_last=index == last />
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </section>
                    <button class="fab" title="Adicionar à fila" on:click=move |_| set_show_form.set(true)>
                        "+"
                    </button>
                }
            >
                <form class="record-form" on:submit=create_entry>
                    <label>
                        "Nome da Cliente *"
                        <input
                            type="text"
                            placeholder="Nome completo"
                            autocomplete="off"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Tipo de Depilação *"
                        <input
                            type="text"
                            placeholder="Ex: Meia perna, Virilha..."
                            autocomplete="off"
                            prop:value=move || depilation_type.get()
                            on:input=move |ev| set_depilation_type.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Profissional"
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

#[component]
fn QueueRow(entry: QueueEntry, is_first: bool, is_last: bool) -> impl IntoView {
    let ctx = use_app_context();

    let move_entry = move |id: &str, direction: Direction| {
        if let Some(Err(e)) = ctx.queue.try_update(|queue| queue.reorder(id, direction)) {
            ctx.report(&e, "");
        }
    };

    let up_id = entry.id.clone();
    let down_id = entry.id.clone();
    let remove_id = entry.id.clone();
    let remove_entry = move |_: ()| {
        match ctx.queue.try_update(|queue| queue.remove(&remove_id)) {
            Some(Ok(_)) => ctx.success("Cliente removido da fila!"),
            Some(Err(e)) => ctx.report(&e, ""),
            None => {}
        }
    };

    let row_class = if is_first { "record-row queue-row next" } else { "record-row queue-row" };
    let professional = entry.professional().map(str::to_string);

    view! {
        <article class=row_class>
            <span class="record-number">{entry.order}</span>
            <div class="record-info">
                <h3 class="record-title">{entry.name.clone()}</h3>
                <p class="record-meta">
                    <span class="badge">{entry.depilation_type.clone()}</span>
                    {professional.map(|p| view! { <span>{p}</span> })}
                    <span>{day_month(&entry.date)}</span>
                </p>
            </div>
            <div class="row-actions">
                <button
                    class="move-btn"
                    title="Subir"
                    disabled=is_first
                    on:click=move |_| move_entry(&up_id, Direction::Up)
                >
                    "▲"
                </button>
                <button
                    class="move-btn"
                    title="Descer"
                    disabled=is_last
                    on:click=move |_| move_entry(&down_id, Direction::Down)
                >
                    "▼"
                </button>
            </div>
            <DeleteConfirmButton label="Remover da fila" on_confirm=remove_entry />
        </article>
    }
}
