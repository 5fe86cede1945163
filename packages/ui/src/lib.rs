//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod alert;
pub use alert::Alert;

mod avatar;
pub use avatar::{avatar_color, initials, initials_from_name, Avatar};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod client_table;
pub use client_table::ClientTable;

mod new_client_dialog;
pub use new_client_dialog::NewClientDialog;

mod note_composer;
pub use note_composer::NoteComposer;

mod category_filter;
pub use category_filter::CategoryFilter;

mod note_card;
pub use note_card::NoteCard;

mod download;
pub use download::download_csv;
