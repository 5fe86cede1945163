//! Client-side filtering and sorting of the client roster.
//!
//! Runs synchronously over the in-memory collection on every change to the
//! source data, the query, or the sort spec. Rosters are small; no index.

use crate::clients::Client;

/// Column the list view sorts by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    LastContacted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            field: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Header-click behavior: clicking the active column flips the direction,
    /// clicking another column switches to it ascending.
    pub fn clicked(self, field: SortField) -> Self {
        if self.field == field {
            SortSpec {
                field,
                direction: self.direction.toggle(),
            }
        } else {
            SortSpec {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Case-insensitive substring filter over name and email.
///
/// An empty or whitespace-only query returns the collection unchanged, in its
/// original order.
pub fn filter_clients(clients: &[Client], query: &str) -> Vec<Client> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return clients.to_vec();
    }
    clients
        .iter()
        .filter(|c| {
            let haystack =
                format!("{} {} {}", c.first_name, c.last_name, c.email).to_lowercase();
            haystack.contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by the given spec.
///
/// Name and email compare case-insensitively. Last contact compares by epoch
/// time with `None` treated as the earliest possible instant, so un-contacted
/// clients lead under ascending order.
pub fn sort_clients(clients: &mut [Client], spec: SortSpec) {
    let directed = |ordering: std::cmp::Ordering| match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };
    match spec.field {
        SortField::Name => clients.sort_by(|a, b| {
            directed(a.full_name().to_lowercase().cmp(&b.full_name().to_lowercase()))
        }),
        SortField::Email => clients.sort_by(|a, b| {
            directed(a.email.to_lowercase().cmp(&b.email.to_lowercase()))
        }),
        SortField::LastContacted => {
            let epoch = |c: &Client| c.last_contacted_at.map(|t| t.timestamp_millis()).unwrap_or(0);
            clients.sort_by(|a, b| directed(epoch(a).cmp(&epoch(b))));
        }
    }
}

/// Filter then sort; what the list view renders.
pub fn apply(clients: &[Client], query: &str, spec: SortSpec) -> Vec<Client> {
    let mut visible = filter_clients(clients, query);
    sort_clients(&mut visible, spec);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn client(id: &str, first: &str, last: &str, email: &str) -> Client {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        Client {
            id: id.to_string(),
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            assigned_user_id: None,
            created_at: ts,
            updated_at: ts,
            last_contacted_at: None,
        }
    }

    fn contacted(mut c: Client, year: i32) -> Client {
        c.last_contacted_at = Some(Utc.with_ymd_and_hms(year, 6, 1, 12, 0, 0).unwrap());
        c
    }

    fn roster() -> Vec<Client> {
        vec![
            client("1", "Zoe", "Young", "zoe@example.com"),
            client("2", "Adam", "Brown", "adam@example.com"),
            client("3", "Mia", "Chen", "mia@other.org"),
        ]
    }

    #[test]
    fn empty_query_preserves_collection_and_order() {
        let clients = roster();
        let filtered = filter_clients(&clients, "");
        assert_eq!(filtered, clients);
        let filtered = filter_clients(&clients, "   ");
        assert_eq!(filtered, clients);
    }

    #[test]
    fn query_matches_name_and_email_case_insensitively() {
        let clients = roster();

        let by_name = filter_clients(&clients, "ZOE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "1");

        let by_email_domain = filter_clients(&clients, "other.org");
        assert_eq!(by_email_domain.len(), 1);
        assert_eq!(by_email_domain[0].id, "3");

        // Substring spanning the first/last name boundary.
        let across = filter_clients(&clients, "am bro");
        assert_eq!(across.len(), 1);
        assert_eq!(across[0].id, "2");

        assert!(filter_clients(&clients, "nobody").is_empty());
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut clients = vec![
            client("1", "adam", "brown", "a@example.com"),
            client("2", "Adam", "Aldrin", "b@example.com"),
        ];
        sort_clients(&mut clients, SortSpec {
            field: SortField::Name,
            direction: SortDirection::Asc,
        });
        assert_eq!(clients[0].id, "2");
    }

    #[test]
    fn never_contacted_sorts_first_ascending_last_descending() {
        let mut clients = vec![
            contacted(client("1", "A", "A", "a@example.com"), 2023),
            client("2", "B", "B", "b@example.com"),
            contacted(client("3", "C", "C", "c@example.com"), 2021),
        ];

        let spec = SortSpec {
            field: SortField::LastContacted,
            direction: SortDirection::Asc,
        };
        sort_clients(&mut clients, spec);
        let ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);

        sort_clients(&mut clients, SortSpec {
            direction: SortDirection::Desc,
            ..spec
        });
        let ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "2"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut clients = vec![
            client("1", "Same", "Name", "first@example.com"),
            client("2", "Same", "Name", "second@example.com"),
        ];
        sort_clients(&mut clients, SortSpec::default());
        assert_eq!(clients[0].id, "1");
        assert_eq!(clients[1].id, "2");
    }

    #[test]
    fn header_click_toggles_or_switches() {
        let spec = SortSpec::default();
        let toggled = spec.clicked(SortField::Name);
        assert_eq!(toggled.direction, SortDirection::Desc);

        let switched = toggled.clicked(SortField::LastContacted);
        assert_eq!(switched.field, SortField::LastContacted);
        assert_eq!(switched.direction, SortDirection::Asc);
    }

    #[test]
    fn apply_filters_then_sorts() {
        let clients = vec![
            client("1", "Zoe", "Young", "zoe@example.com"),
            client("2", "Adam", "Brown", "adam@example.com"),
            client("3", "Anna", "Young", "anna@example.com"),
        ];
        let visible = apply(&clients, "young", SortSpec::default());
        let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }
}
