//! CSV serialization of the client roster.
//!
//! A pure string transform over whatever filtered/sorted sequence the list
//! view is currently showing. Fields containing a comma, quote, or line break
//! are quoted with internal quotes doubled, per RFC 4180.

use chrono::NaiveDate;

use crate::clients::Client;
use crate::time::format_absolute;

pub const CSV_HEADER: &str = "Name,Email,Assigned,Last Contacted,Status";

/// Serialize the given clients to CSV text, one row per client, in order.
pub fn clients_to_csv(clients: &[Client]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push_str("\r\n");
    for client in clients {
        let last_contacted = match client.last_contacted_at {
            Some(ts) => format_absolute(ts),
            None => "Never".to_string(),
        };
        let assigned = if client.assigned_user_id.is_some() { "Yes" } else { "No" };
        let row = [
            client.full_name(),
            client.email.clone(),
            assigned.to_string(),
            last_contacted,
            "Active".to_string(),
        ];
        let escaped: Vec<String> = row.iter().map(|f| escape_field(f)).collect();
        out.push_str(&escaped.join(","));
        out.push_str("\r\n");
    }
    out
}

/// Download filename carrying the export date: `clients-2024-06-01.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("clients-{}.csv", date.format("%Y-%m-%d"))
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn client(first: &str, last: &str, email: &str) -> Client {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        Client {
            id: "c-1".to_string(),
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            assigned_user_id: None,
            created_at: ts,
            updated_at: ts,
            last_contacted_at: None,
        }
    }

    /// Minimal RFC 4180 reader used to round-trip the produced text.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if in_quotes {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => in_quotes = false,
                    _ => field.push(c),
                }
            } else {
                match c {
                    '"' => in_quotes = true,
                    ',' => row.push(std::mem::take(&mut field)),
                    '\r' => {}
                    '\n' => {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    _ => field.push(c),
                }
            }
        }
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            rows.push(row);
        }
        rows
    }

    #[test]
    fn header_is_fixed() {
        let csv = clients_to_csv(&[]);
        assert_eq!(csv, "Name,Email,Assigned,Last Contacted,Status\r\n");
    }

    #[test]
    fn comma_and_quote_fields_are_escaped() {
        let c = client("O'Brien, Jr.", "Smith", "a@b.com");
        let csv = clients_to_csv(&[c]);
        let line = csv.lines().nth(1).unwrap();
        assert!(line.starts_with("\"O'Brien, Jr. Smith\","));
        assert!(line.contains("a@b.com"));

        let c = client("Ann \"Andy\"", "Lee", "ann@b.com");
        let csv = clients_to_csv(&[c]);
        assert!(csv.contains("\"Ann \"\"Andy\"\" Lee\""));
    }

    #[test]
    fn round_trip_reconstructs_rows() {
        let mut contacted = client("O'Brien, Jr.", "Smith", "a@b.com");
        contacted.assigned_user_id = Some("u-1".to_string());
        contacted.last_contacted_at = Some(Utc.with_ymd_and_hms(2024, 5, 20, 16, 45, 0).unwrap());
        let never = client("Plain", "Name", "plain@b.com");

        let csv = clients_to_csv(&[contacted.clone(), never]);
        let rows = parse_csv(&csv);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Name", "Email", "Assigned", "Last Contacted", "Status"]);
        let expected = vec![
            "O'Brien, Jr. Smith".to_string(),
            "a@b.com".to_string(),
            "Yes".to_string(),
            format_absolute(contacted.last_contacted_at.unwrap()),
            "Active".to_string(),
        ];
        assert_eq!(rows[1], expected);
        assert_eq!(rows[2], ["Plain Name", "plain@b.com", "No", "Never", "Active"]);
    }

    #[test]
    fn newline_in_field_is_quoted_and_survives() {
        let c = client("Line\nBreak", "Case", "lb@b.com");
        let csv = clients_to_csv(&[c]);
        let rows = parse_csv(&csv);
        assert_eq!(rows[1][0], "Line\nBreak Case");
    }

    #[test]
    fn filename_carries_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(export_filename(date), "clients-2024-06-01.csv");
    }
}
