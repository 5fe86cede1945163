use dioxus::prelude::*;

use model::time::{format_absolute, format_relative};
use model::ClientNote;

use crate::avatar::{avatar_color, initials_from_name};

const NOTES_CSS: Asset = asset!("/assets/styling/notes.css");

/// One activity entry: creator avatar and name, relative timestamp with the
/// absolute form as tooltip, category badge, and the note body.
#[component]
pub fn NoteCard(note: ClientNote) -> Element {
    let creator_initials = initials_from_name(&note.creator_name);
    let creator_color = avatar_color(&note.creator_name);
    let relative = format_relative(note.created_at);
    let absolute = format_absolute(note.created_at);
    let category_class = note.category.css_class();
    let category_label = note.category.label().to_string();

    rsx! {
        document::Stylesheet { href: NOTES_CSS }

        div {
            class: "note-card {category_class}",
            div {
                class: "note-card-header",
                div {
                    class: "note-avatar",
                    style: "background-color: {creator_color}",
                    span { "{creator_initials}" }
                }
                div {
                    class: "note-meta",
                    span { class: "note-creator", "{note.creator_name}" }
                    span { class: "note-dot", "·" }
                    span {
                        class: "note-timestamp",
                        title: "{absolute}",
                        "{relative}"
                    }
                    span { class: "note-badge {category_class}", "{category_label}" }
                }
            }
            p { class: "note-content", "{note.content}" }
        }
    }
}
