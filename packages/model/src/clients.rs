//! # Domain models for clients and their activity notes
//!
//! Defines the record shapes exchanged with the CRM REST API. These types are
//! `Serialize + Deserialize` so they can be decoded straight from response
//! bodies by the api crate's client wrapper and passed around as component
//! props.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Client`] | A customer record tracked by an advisor. Read-only from this app's perspective after creation: there is no edit or delete surface in the UI. |
//! | [`ClientNote`] | A timestamped, categorized free-text activity entry attached to exactly one client. Immutable once created; the server assigns ordering. |
//! | [`CreateClientRequest`] | Body of `POST client`. |
//! | [`CreateClientNoteRequest`] | Body of `POST client/{id}/note`. `category` is omitted from the JSON when unset and the server defaults it to `note`. |
//!
//! Timestamps are RFC 3339 on the wire and `chrono::DateTime<Utc>` here.
//! `email` uniqueness is enforced server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::NoteCategory;

/// A CRM client record as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Advisor this client is assigned to, if any.
    pub assigned_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// When the client was last contacted. `None` means never.
    #[serde(default)]
    pub last_contacted_at: Option<DateTime<Utc>>,
}

impl Client {
    /// Display name: first and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An activity entry attached to a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientNote {
    pub id: String,
    pub client_id: String,
    pub creator_user_id: String,
    pub creator_name: String,
    pub content: String,
    #[serde(default)]
    pub category: NoteCategory,
    pub created_at: DateTime<Utc>,
}

/// Body of the client creation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of the note creation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateClientNoteRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<NoteCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_client_with_last_contact() {
        let json = r#"{
            "id": "c-1",
            "email": "jane@example.com",
            "first_name": "Jane",
            "last_name": "Doe",
            "assigned_user_id": "u-9",
            "created_at": "2024-01-02T10:00:00Z",
            "updated_at": "2024-06-01T09:30:00Z",
            "last_contacted_at": "2024-05-20T16:45:00Z"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.full_name(), "Jane Doe");
        assert_eq!(client.assigned_user_id.as_deref(), Some("u-9"));
        assert!(client.last_contacted_at.is_some());
    }

    #[test]
    fn deserialize_client_null_and_missing_last_contact() {
        let with_null = r#"{
            "id": "c-2",
            "email": "sam@example.com",
            "first_name": "Sam",
            "last_name": "Hill",
            "assigned_user_id": null,
            "created_at": "2024-01-02T10:00:00Z",
            "updated_at": "2024-01-02T10:00:00Z",
            "last_contacted_at": null
        }"#;
        let client: Client = serde_json::from_str(with_null).unwrap();
        assert!(client.last_contacted_at.is_none());
        assert!(client.assigned_user_id.is_none());

        // Earlier API revisions do not send the field at all.
        let without = r#"{
            "id": "c-3",
            "email": "kim@example.com",
            "first_name": "Kim",
            "last_name": "Lee",
            "assigned_user_id": null,
            "created_at": "2024-01-02T10:00:00Z",
            "updated_at": "2024-01-02T10:00:00Z"
        }"#;
        let client: Client = serde_json::from_str(without).unwrap();
        assert!(client.last_contacted_at.is_none());
    }

    #[test]
    fn deserialize_note() {
        let json = r#"{
            "id": "n-1",
            "client_id": "c-1",
            "creator_user_id": "u-9",
            "creator_name": "Alex Advisor",
            "content": "Called, left voicemail",
            "category": "call",
            "created_at": "2024-06-01T09:30:00Z"
        }"#;

        let note: ClientNote = serde_json::from_str(json).unwrap();
        assert_eq!(note.category, NoteCategory::Call);
        assert_eq!(note.content, "Called, left voicemail");
    }

    #[test]
    fn create_note_request_omits_unset_category() {
        let req = CreateClientNoteRequest {
            content: "Quick sync".to_string(),
            category: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"content":"Quick sync"}"#);

        let req = CreateClientNoteRequest {
            content: "Quick sync".to_string(),
            category: Some(NoteCategory::Meeting),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"content":"Quick sync","category":"meeting"}"#);
    }
}
