use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaAt, FaNoteSticky, FaPaperPlane, FaPhone, FaRotate, FaUsers};
use dioxus_free_icons::Icon;

use model::NoteCategory;

use crate::Alert;

const NOTES_CSS: Asset = asset!("/assets/styling/notes.css");

pub(crate) fn category_icon(category: &NoteCategory) -> Element {
    match category {
        NoteCategory::Call => rsx! { Icon { icon: FaPhone, width: 12, height: 12 } },
        NoteCategory::Meeting => rsx! { Icon { icon: FaUsers, width: 12, height: 12 } },
        NoteCategory::Email => rsx! { Icon { icon: FaAt, width: 12, height: 12 } },
        NoteCategory::FollowUp => rsx! { Icon { icon: FaRotate, width: 12, height: 12 } },
        NoteCategory::Note | NoteCategory::Unknown(_) => {
            rsx! { Icon { icon: FaNoteSticky, width: 12, height: 12 } }
        }
    }
}

#[component]
fn ComposerChip(chip: NoteCategory, active: bool, on_select: EventHandler<NoteCategory>) -> Element {
    let class = if active {
        format!("composer-chip active {}", chip.css_class())
    } else {
        "composer-chip".to_string()
    };
    let label = chip.label().to_string();
    let icon = category_icon(&chip);
    let selected = chip.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(selected.clone()),
            {icon}
            span { "{label}" }
        }
    }
}

/// Composer for a new activity note: category chip row, free-text body, and a
/// save button that stays disabled while the body is blank or a submission is
/// in flight.
///
/// Fully controlled: the owning page holds the draft so it can clear it on
/// success and leave it alone on failure.
#[component]
pub fn NoteComposer(
    content: String,
    category: NoteCategory,
    submitting: bool,
    error: Option<String>,
    on_content: EventHandler<String>,
    on_category: EventHandler<NoteCategory>,
    on_submit: EventHandler<()>,
) -> Element {
    let blank = content.trim().is_empty();

    rsx! {
        document::Stylesheet { href: NOTES_CSS }

        div {
            class: "note-composer",
            div {
                class: "composer-categories",
                for chip in NoteCategory::ALL {
                    ComposerChip {
                        key: "{chip.as_str()}",
                        active: chip == category,
                        chip,
                        on_select: on_category,
                    }
                }
            }

            textarea {
                class: "composer-textarea",
                placeholder: "Log a note, call summary, or follow-up...",
                rows: "3",
                value: "{content}",
                oninput: move |evt| on_content.call(evt.value()),
            }

            if let Some(ref message) = error {
                Alert {
                    title: "Could not save note",
                    "{message}"
                }
            }

            div {
                class: "composer-actions",
                button {
                    class: "primary",
                    disabled: blank || submitting,
                    onclick: move |_| on_submit.call(()),
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    if submitting { " Saving..." } else { " Save" }
                }
            }
        }
    }
}
