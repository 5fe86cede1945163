use chrono::Utc;
use dioxus::prelude::*;

use model::{export, roster, Client, CreateClientRequest, SortSpec};
use ui::icons::{FaDownload, FaMagnifyingGlass, FaPlus};
use ui::{download_csv, Alert, ClientTable, Icon, ModalOverlay, NewClientDialog};

use super::make_api;
use crate::Route;

const CLIENTS_CSS: Asset = asset!("/assets/clients.css");

#[component]
pub fn Clients() -> Element {
    let mut clients = use_signal(Vec::<Client>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut query = use_signal(String::new);
    let mut sort = use_signal(SortSpec::default);
    let mut show_new_client = use_signal(|| false);
    let mut creating = use_signal(|| false);
    let mut create_error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    // Single fetch on mount; search and sort run locally over this copy.
    let _loader = use_resource(move || async move {
        match make_api().list_clients().await {
            Ok(list) => {
                clients.set(list);
                error.set(None);
            }
            Err(err) => error.set(Some(err.user_message())),
        }
        loading.set(false);
    });

    let visible = roster::apply(&clients(), &query(), sort());
    let visible_count = visible.len();
    let total_count = clients().len();

    let on_sort = move |field: model::SortField| sort.set(sort().clicked(field));

    let on_select = move |id: String| {
        nav.push(Route::ClientDetail { id });
    };

    // Serializes what is on screen right now, not the full roster.
    let handle_export = move |_| {
        let rows = roster::apply(&clients(), &query(), sort());
        let csv = export::clients_to_csv(&rows);
        let filename = export::export_filename(Utc::now().date_naive());
        download_csv(&filename, &csv);
    };

    let handle_create = move |request: CreateClientRequest| {
        spawn(async move {
            creating.set(true);
            match make_api().create_client(&request).await {
                Ok(created) => {
                    clients.write().push(created);
                    create_error.set(None);
                    show_new_client.set(false);
                }
                Err(err) => create_error.set(Some(err.user_message())),
            }
            creating.set(false);
        });
    };

    rsx! {
        document::Stylesheet { href: CLIENTS_CSS }
        document::Title { "Clients | ClientDesk" }

        div {
            class: "clients-page",

            div {
                class: "clients-header",
                h2 { "Clients" }
                div {
                    class: "clients-toolbar",
                    div {
                        class: "search-box",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        input {
                            r#type: "search",
                            placeholder: "Search name or email...",
                            value: query(),
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }
                    button {
                        class: "toolbar-button",
                        onclick: handle_export,
                        Icon { icon: FaDownload, width: 14, height: 14 }
                        span { "Export CSV" }
                    }
                    button {
                        class: "toolbar-button primary",
                        onclick: move |_| {
                            create_error.set(None);
                            show_new_client.set(true);
                        },
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "New Client" }
                    }
                }
            }

            if loading() {
                div { class: "clients-loading", "Loading..." }
            } else {
                if let Some(ref message) = error() {
                    Alert {
                        title: "Could not load clients",
                        "{message}"
                    }
                } else {
                    ClientTable {
                        clients: visible.clone(),
                        sort: sort(),
                        on_sort,
                        on_select,
                    }
                    div {
                        class: "clients-count",
                        "Showing {visible_count} of {total_count} clients"
                    }
                }
            }

            if show_new_client() {
                ModalOverlay {
                    on_close: move |_| show_new_client.set(false),
                    NewClientDialog {
                        busy: creating(),
                        error: create_error(),
                        on_create: handle_create,
                        on_cancel: move |_| show_new_client.set(false),
                    }
                }
            }
        }
    }
}
