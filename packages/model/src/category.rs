//! Note categories.
//!
//! The server works with a closed set of category strings but does not enforce
//! it in the response schema, so the enum keeps an [`NoteCategory::Unknown`]
//! variant to round-trip values this build does not recognize yet instead of
//! failing deserialization.

use serde::{Deserialize, Serialize};

/// Kind of activity a note records.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteCategory {
    Note,
    Call,
    Meeting,
    Email,
    FollowUp,
    /// A category string the client does not recognize. Preserved verbatim.
    Unknown(String),
}

impl NoteCategory {
    /// Composer ordering, matching the chip row in the detail view.
    pub const ALL: [NoteCategory; 5] = [
        NoteCategory::Note,
        NoteCategory::Call,
        NoteCategory::Meeting,
        NoteCategory::Email,
        NoteCategory::FollowUp,
    ];

    /// The wire string for this category.
    pub fn as_str(&self) -> &str {
        match self {
            NoteCategory::Note => "note",
            NoteCategory::Call => "call",
            NoteCategory::Meeting => "meeting",
            NoteCategory::Email => "email",
            NoteCategory::FollowUp => "follow_up",
            NoteCategory::Unknown(s) => s,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            NoteCategory::Note => "Note",
            NoteCategory::Call => "Call",
            NoteCategory::Meeting => "Meeting",
            NoteCategory::Email => "Email",
            NoteCategory::FollowUp => "Follow-up",
            NoteCategory::Unknown(s) => s,
        }
    }

    /// Styling bucket for badges and card borders. Unrecognized categories
    /// share the plain note styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoteCategory::Note | NoteCategory::Unknown(_) => "note",
            NoteCategory::Call => "call",
            NoteCategory::Meeting => "meeting",
            NoteCategory::Email => "email",
            NoteCategory::FollowUp => "follow-up",
        }
    }
}

impl Default for NoteCategory {
    fn default() -> Self {
        NoteCategory::Note
    }
}

impl From<String> for NoteCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "note" => NoteCategory::Note,
            "call" => NoteCategory::Call,
            "meeting" => NoteCategory::Meeting,
            "email" => NoteCategory::Email,
            "follow_up" => NoteCategory::FollowUp,
            _ => NoteCategory::Unknown(s),
        }
    }
}

impl From<NoteCategory> for String {
    fn from(category: NoteCategory) -> Self {
        category.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        for category in NoteCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let back: NoteCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
        assert_eq!(
            serde_json::to_string(&NoteCategory::FollowUp).unwrap(),
            r#""follow_up""#
        );
    }

    #[test]
    fn unknown_category_is_preserved() {
        let parsed: NoteCategory = serde_json::from_str(r#""sms""#).unwrap();
        assert_eq!(parsed, NoteCategory::Unknown("sms".to_string()));
        assert_eq!(parsed.as_str(), "sms");
        assert_eq!(parsed.css_class(), "note");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""sms""#);
    }

    #[test]
    fn default_is_note() {
        assert_eq!(NoteCategory::default(), NoteCategory::Note);
    }

    #[test]
    fn labels() {
        assert_eq!(NoteCategory::FollowUp.label(), "Follow-up");
        assert_eq!(NoteCategory::Call.label(), "Call");
    }
}
