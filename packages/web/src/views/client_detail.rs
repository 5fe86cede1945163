use dioxus::prelude::*;

use model::time::{format_absolute, format_date, format_relative, ContactRecency};
use model::{Client, ClientNote, CreateClientNoteRequest, NoteCategory};
use ui::icons::{FaArrowLeft, FaCalendar, FaClock, FaEnvelope, FaNoteSticky};
use ui::{initials, Alert, Avatar, CategoryFilter, Icon, NoteCard, NoteComposer};

use super::make_api;
use crate::Route;

const CLIENT_DETAIL_CSS: Asset = asset!("/assets/client_detail.css");

#[component]
pub fn ClientDetail(id: String) -> Element {
    // Track the route param in a signal so the loader re-runs when navigating
    // straight from one client page to another.
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut client = use_signal(|| Option::<Client>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notes = use_signal(Vec::<ClientNote>::new);
    let mut notes_error = use_signal(|| Option::<String>::None);
    let mut note_content = use_signal(String::new);
    let mut note_category = use_signal(NoteCategory::default);
    let mut submitting = use_signal(|| false);
    let mut composer_error = use_signal(|| Option::<String>::None);
    let mut active_filter = use_signal(|| Option::<NoteCategory>::None);
    let nav = use_navigator();

    // The client record and its notes load independently; a notes failure
    // leaves the client card usable and vice versa. Every write below checks
    // that the response still belongs to the id being shown, so a slow reply
    // for a previous client cannot overwrite this page's state.
    let _loader = use_resource(move || {
        let requested = id_signal();
        async move {
            loading.set(true);
            error.set(None);
            notes_error.set(None);
            let api = make_api();

            let client_result = api.get_client(&requested).await;
            if *id_signal.peek() != requested {
                return;
            }
            match client_result {
                Ok(found) => client.set(Some(found)),
                Err(err) => {
                    client.set(None);
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);

            let notes_result = api.list_notes(&requested).await;
            if *id_signal.peek() != requested {
                return;
            }
            match notes_result {
                Ok(list) => notes.set(list),
                Err(err) => notes_error.set(Some(err.user_message())),
            }
        }
    });

    let handle_submit_note = move |_| {
        let requested = id_signal();
        let content = note_content().trim().to_string();
        if content.is_empty() || submitting() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            let request = CreateClientNoteRequest {
                content,
                category: Some(note_category()),
            };
            let result = make_api().create_note(&requested, &request).await;
            if *id_signal.peek() == requested {
                match result {
                    Ok(created) => {
                        notes.write().insert(0, created);
                        note_content.set(String::new());
                        note_category.set(NoteCategory::default());
                        composer_error.set(None);
                    }
                    Err(err) => composer_error.set(Some(err.user_message())),
                }
            }
            submitting.set(false);
        });
    };

    let filtered_notes: Vec<ClientNote> = match active_filter() {
        Some(category) => notes()
            .iter()
            .filter(|n| n.category == category)
            .cloned()
            .collect(),
        None => notes(),
    };
    let note_count = notes().len();
    let filter_label = active_filter()
        .map(|c| c.label().to_lowercase())
        .unwrap_or_else(|| "matching".to_string());

    let title = match client() {
        Some(current) => format!("{} | ClientDesk", current.full_name()),
        None => "Client | ClientDesk".to_string(),
    };

    rsx! {
        document::Stylesheet { href: CLIENT_DETAIL_CSS }
        document::Title { "{title}" }

        div {
            class: "client-detail-page",

            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::Clients {});
                },
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                span { "Back to Clients" }
            }

            if loading() {
                div { class: "detail-loading", "Loading..." }
            } else {
                if let Some(current) = client() {
                    ClientCard { client: current }

                    div {
                        class: "activity-header",
                        Icon { icon: FaNoteSticky, width: 18, height: 18 }
                        h3 { "Activity" }
                        span { class: "activity-count", "{note_count}" }
                    }

                    CategoryFilter {
                        active: active_filter(),
                        on_change: move |value: Option<NoteCategory>| active_filter.set(value),
                    }

                    NoteComposer {
                        content: note_content(),
                        category: note_category(),
                        submitting: submitting(),
                        error: composer_error(),
                        on_content: move |value: String| note_content.set(value),
                        on_category: move |value: NoteCategory| note_category.set(value),
                        on_submit: handle_submit_note,
                    }

                    if let Some(ref message) = notes_error() {
                        Alert {
                            title: "Could not load activity",
                            "{message}"
                        }
                    } else {
                        if note_count == 0 {
                            div {
                                class: "empty-state",
                                Icon { icon: FaNoteSticky, width: 36, height: 36 }
                                p { "No activity yet" }
                                span { "Notes and interactions will appear here." }
                            }
                        } else if filtered_notes.is_empty() {
                            p {
                                class: "filtered-empty",
                                "No {filter_label} entries found."
                            }
                        } else {
                            div {
                                class: "note-list",
                                for note in filtered_notes {
                                    NoteCard { key: "{note.id}", note: note.clone() }
                                }
                            }
                        }
                    }
                } else {
                    Alert {
                        title: "Client not found",
                        if let Some(ref message) = error() {
                            "{message}"
                        } else {
                            "This client does not exist or may have been removed."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ClientCard(client: Client) -> Element {
    let name = client.full_name();
    let avatar_initials = initials(&client.first_name, &client.last_name);
    let member_since = format_date(client.created_at);
    let recency = ContactRecency::of(client.last_contacted_at);
    let contact_class = format!("last-contacted {}", recency.css_class());
    let (contact_text, contact_title) = match client.last_contacted_at {
        Some(ts) => (format_relative(ts), format_absolute(ts)),
        None => ("Never".to_string(), String::new()),
    };

    rsx! {
        div {
            class: "client-card",
            div {
                class: "client-card-header",
                Avatar { name: name.clone(), initials: avatar_initials, large: true }
                div {
                    class: "client-card-title",
                    h2 { "{name}" }
                    div {
                        class: "client-email",
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        span { "{client.email}" }
                    }
                }
            }
            div {
                class: "client-card-rows",
                div {
                    class: "info-row",
                    Icon { icon: FaCalendar, width: 14, height: 14 }
                    span { class: "info-label", "Member since" }
                    span { class: "info-value", "{member_since}" }
                }
                div {
                    class: "info-row",
                    Icon { icon: FaClock, width: 14, height: 14 }
                    span { class: "info-label", "Last contacted" }
                    span {
                        class: "{contact_class}",
                        title: "{contact_title}",
                        "{contact_text}"
                    }
                }
                div {
                    class: "info-row",
                    span { class: "info-label", "Status" }
                    span { class: "detail-status-badge", "Active" }
                }
            }
        }
    }
}
