use dioxus::prelude::*;

use model::NoteCategory;

const NOTES_CSS: Asset = asset!("/assets/styling/notes.css");

// Filter chip order differs from the composer: "All" first, plain notes last.
const FILTER_ORDER: [NoteCategory; 5] = [
    NoteCategory::Call,
    NoteCategory::Meeting,
    NoteCategory::Email,
    NoteCategory::FollowUp,
    NoteCategory::Note,
];

#[component]
fn FilterChip(
    chip: NoteCategory,
    active: bool,
    on_select: EventHandler<Option<NoteCategory>>,
) -> Element {
    let class = if active { "filter-chip active" } else { "filter-chip" };
    let label = chip.label().to_string();
    let selected = chip.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(Some(selected.clone())),
            "{label}"
        }
    }
}

/// Chip row selecting which note categories are visible. `None` means all.
/// Purely a display-side selection; the note collection itself is untouched.
#[component]
pub fn CategoryFilter(
    active: Option<NoteCategory>,
    on_change: EventHandler<Option<NoteCategory>>,
) -> Element {
    rsx! {
        document::Stylesheet { href: NOTES_CSS }

        div {
            class: "filter-chips",
            button {
                class: if active.is_none() { "filter-chip active" } else { "filter-chip" },
                onclick: move |_| on_change.call(None),
                "All"
            }
            for chip in FILTER_ORDER {
                FilterChip {
                    key: "{chip.as_str()}",
                    active: active.as_ref() == Some(&chip),
                    chip,
                    on_select: on_change,
                }
            }
        }
    }
}
