use dioxus::prelude::*;

use model::time::{format_absolute, format_relative, ContactRecency};
use model::{Client, SortDirection, SortField, SortSpec};

const CLIENT_TABLE_CSS: Asset = asset!("/assets/styling/client_table.css");

/// The roster table: sortable Name / Email / Last Contacted headers, one
/// clickable row per client in the order the caller already filtered and
/// sorted.
#[component]
pub fn ClientTable(
    clients: Vec<Client>,
    sort: SortSpec,
    on_sort: EventHandler<SortField>,
    on_select: EventHandler<String>,
) -> Element {
    let indicator = |field: SortField| -> &'static str {
        if sort.field != field {
            return "";
        }
        match sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    };
    let name_indicator = indicator(SortField::Name);
    let email_indicator = indicator(SortField::Email);
    let contacted_indicator = indicator(SortField::LastContacted);

    rsx! {
        document::Stylesheet { href: CLIENT_TABLE_CSS }

        table {
            class: "client-table",
            thead {
                tr {
                    th {
                        class: "sortable",
                        onclick: move |_| on_sort.call(SortField::Name),
                        "Name{name_indicator}"
                    }
                    th {
                        class: "sortable",
                        onclick: move |_| on_sort.call(SortField::Email),
                        "Email{email_indicator}"
                    }
                    th { "Assigned" }
                    th {
                        class: "sortable",
                        onclick: move |_| on_sort.call(SortField::LastContacted),
                        "Last Contacted{contacted_indicator}"
                    }
                    th { "Status" }
                }
            }
            tbody {
                for client in clients {
                    ClientRow {
                        key: "{client.id}",
                        client: client.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn ClientRow(client: Client, on_select: EventHandler<String>) -> Element {
    let name = client.full_name();
    let assigned = if client.assigned_user_id.is_some() { "Yes" } else { "No" };
    let recency = ContactRecency::of(client.last_contacted_at);
    let contacted_class = format!("cell-last-contacted {}", recency.css_class());
    let (contacted_text, contacted_title) = match client.last_contacted_at {
        Some(ts) => (format_relative(ts), format_absolute(ts)),
        None => ("Never".to_string(), String::new()),
    };
    let id = client.id.clone();

    rsx! {
        tr {
            class: "client-row",
            onclick: move |_| on_select.call(id.clone()),
            td { "{name}" }
            td { "{client.email}" }
            td { "{assigned}" }
            td {
                class: "{contacted_class}",
                title: "{contacted_title}",
                "{contacted_text}"
            }
            td {
                span { class: "status-badge", "Active" }
            }
        }
    }
}
