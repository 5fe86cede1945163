//! Domain types and pure view logic shared by every frontend crate.

pub mod category;
pub mod clients;
pub mod export;
pub mod roster;
pub mod time;

pub use category::NoteCategory;
pub use clients::{Client, ClientNote, CreateClientNoteRequest, CreateClientRequest};
pub use roster::{SortDirection, SortField, SortSpec};
pub use time::ContactRecency;
