//! Clients Page Component
//!
//! New-clients rotation: add a client, tick them off once served.

use espacosow_core::domain::{Client, ClientForm};
use espacosow_core::{views, ClientOperations};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, PageHeader};
use crate::context::use_app_context;
use crate::format::{served_summary, short_date, today_input};

#[component]
pub fn ClientsPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (show_form, set_show_form) = signal(false);
    let (name, set_name) = signal(String::new());
    let (date, set_date) = signal(today_input());
    let (professional, set_professional) = signal(String::new());
    let (service, set_service) = signal(String::new());

    let reset_form = move || {
        set_name.set(String::new());
        set_date.set(today_input());
        set_professional.set(String::new());
        set_service.set(String::new());
    };

    let create_client = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ClientForm {
            name: name.get_untracked(),
            date: date.get_untracked(),
            professional: professional.get_untracked(),
            service: service.get_untracked(),
        };
        match ctx.clients.try_update(|clients| clients.create(&form)) {
            Some(Ok(_)) => {
                reset_form();
                set_show_form.set(false);
                ctx.success("Cliente adicionado com sucesso!");
            }
            Some(Err(e)) => ctx.report(&e, "Preencha todos os campos obrigatórios"),
            None => {}
        }
    };

    let sorted_clients = move || {
        ctx.clients.with(|clients| {
            views::clients_by_date_desc(clients.items())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page page-clients">
            <PageHeader title="Clientes Novos" subtitle="Rotação de atendimentos" on_back=on_back />

            <Show
                when=move || show_form.get()
                fallback=move || view! {
                    <section class="list">
                        <div class="list-header">
                            <h2>"Clientes"</h2>
                            <span class="list-count">
                                {move || ctx.clients.with(|clients| served_summary(clients.served_count(), clients.len()))}
                            </span>
                        </div>
                        {move || {
                            let clients = sorted_clients();
                            if clients.is_empty() {
                                view! { <p class="empty-state">"Nenhum cliente cadastrado"</p> }.into_any()
                            } else {
                                clients
                                    .into_iter()
                                    .map(|client| view! { <ClientRow client=client /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </section>
                    <button class="fab" title="Adicionar cliente" on:click=move |_| set_show_form.set(true)>
                        "+"
                    </button>
                }
            >
                <form class="record-form" on:submit=create_client>
                    <label>
                        "Nome do Cliente *"
                        <input
                            type="text"
                            placeholder="Nome completo"
                            autocomplete="off"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Data *"
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Profissional *"
                        <input
                            type="text"
                            placeholder="Nome do profissional"
                            autocomplete="off"
                            prop:value=move || professional.get()
                            on:input=move |ev| set_professional.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Serviço Realizado *"
                        <input
                            type="text"
                            placeholder="Ex: Corte, Escova, Coloração..."
                            autocomplete="off"
                            prop:value=move || service.get()
                            on:input=move |ev| set_service.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| set_show_form.set(false)>
                            "Cancelar"
                        </button>
                        <button type="submit" class="primary-btn">"Salvar"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// One client row with served checkbox and remove button
#[component]
fn ClientRow(client: Client) -> impl IntoView {
    let ctx = use_app_context();

    let toggle_id = client.id.clone();
    let toggle_served = move |_| {
        match ctx.clients.try_update(|clients| clients.toggle_served(&toggle_id)) {
            Some(Ok(_)) => ctx.success("Status atualizado!"),
            Some(Err(e)) => ctx.report(&e, ""),
            None => {}
        }
    };

    let remove_id = client.id.clone();
    let remove_client = move |_: ()| {
        match ctx.clients.try_update(|clients| clients.remove(&remove_id)) {
            Some(Ok(_)) => ctx.success("Cliente removido!"),
            Some(Err(e)) => ctx.report(&e, ""),
            None => {}
        }
    };

    let row_class = if client.served { "record-row client-row served" } else { "record-row client-row" };

    view! {
        <article class=row_class>
            <input
                type="checkbox"
                title="Atendido"
                prop:checked=client.served
                on:change=toggle_served
            />
            <div class="record-info">
                <h3 class="record-title">
                    {client.name.clone()}
                    {client.served.then(|| view! { <span class="badge badge-served">"✓"</span> })}
                </h3>
                <p class="record-meta">
                    <span>{short_date(&client.date)}</span>
                    <span>{client.professional.clone()}</span>
                    <span>{client.service.clone()}</span>
                </p>
            </div>
            <DeleteConfirmButton label="Remover cliente" on_confirm=remove_client />
        </article>
    }
}
