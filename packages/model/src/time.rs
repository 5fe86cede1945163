//! # Timestamp formatting helpers
//!
//! Pure conversions from API timestamps to the strings the views render:
//! a relative idiom ("3 days ago") for activity feeds and last-contact cells,
//! absolute en-US forms for tooltips and the member-since row, and the
//! 30/90-day recency buckets used to flag clients who have not been contacted
//! recently.
//!
//! Every formatter has an `_at` variant taking an explicit "now" so the logic
//! stays deterministic under test; the short names read the clock.

use chrono::{DateTime, Utc};

/// Whole days elapsed between `then` and `now` (floor).
pub fn days_between(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    (now - then).num_days()
}

pub fn days_since(then: DateTime<Utc>) -> i64 {
    days_between(Utc::now(), then)
}

/// Relative idiom used across the UI: "Today", "1 day ago", "3 days ago",
/// "2 months ago", "1 year ago".
pub fn format_relative_at(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let days = days_between(now, then);

    if days < 1 {
        return "Today".to_string();
    }
    if days == 1 {
        return "1 day ago".to_string();
    }
    if days < 30 {
        return format!("{days} days ago");
    }

    let months = days / 30;
    if months == 1 {
        return "1 month ago".to_string();
    }
    if months < 12 {
        return format!("{months} months ago");
    }

    let years = (days / 365).max(1);
    if years == 1 {
        return "1 year ago".to_string();
    }
    format!("{years} years ago")
}

pub fn format_relative(then: DateTime<Utc>) -> String {
    format_relative_at(Utc::now(), then)
}

/// "Jun 1, 2024, 9:30 AM"
pub fn format_absolute(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// "June 1, 2024"
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y").to_string()
}

/// How recently a client was contacted, bucketed by the 30/90-day staleness
/// thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactRecency {
    /// No contact on record.
    Never,
    Recent,
    /// More than 30 days ago.
    Warning,
    /// More than 90 days ago.
    Stale,
}

impl ContactRecency {
    pub fn of_at(now: DateTime<Utc>, last_contacted: Option<DateTime<Utc>>) -> Self {
        let Some(then) = last_contacted else {
            return ContactRecency::Never;
        };
        let days = days_between(now, then);
        if days > 90 {
            ContactRecency::Stale
        } else if days > 30 {
            ContactRecency::Warning
        } else {
            ContactRecency::Recent
        }
    }

    pub fn of(last_contacted: Option<DateTime<Utc>>) -> Self {
        Self::of_at(Utc::now(), last_contacted)
    }

    /// CSS modifier for the last-contacted cell.
    pub fn css_class(self) -> &'static str {
        match self {
            ContactRecency::Never => "never",
            ContactRecency::Recent => "recent",
            ContactRecency::Warning => "warning",
            ContactRecency::Stale => "stale",
        }
    }
}
