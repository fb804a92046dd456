//! Column discovery for list endpoints with an open set of fields.
//!
//! The column set of a page is taken from its first record. Rows are assumed
//! to share that shape; [`fields_missing_in_rows`] reports where they do not.

use contracts::shared::DynamicRecord;

/// Cell text for a dynamic field that a row does not carry.
pub const MISSING_VALUE: &str = "N/A";

/// Dynamic headers: fields of `first` in payload order, minus `excluded`.
pub fn derive_headers(first: &DynamicRecord, excluded: &[&str]) -> Vec<String> {
    first
        .field_names()
        .filter(|field| !excluded.contains(field))
        .map(str::to_string)
        .collect()
}

/// Column label for a field name: first character upper-cased, rest untouched.
pub fn header_label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cell text of a dynamic column.
pub fn dynamic_cell(record: &DynamicRecord, field: &str) -> String {
    record
        .display(field)
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Headers that at least one row of the page does not carry. A `null` value
/// still counts as carried.
pub fn fields_missing_in_rows(rows: &[DynamicRecord], headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .filter(|field| rows.iter().any(|row| !row.has_field(field)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DynamicRecord {
        DynamicRecord::new()
            .with("transactionID", "T1")
            .with("purpose", "Meeting")
            .with("status", "Approved")
            .with("attendees", 12)
    }

    #[test]
    fn test_derive_headers_skips_excluded_and_keeps_order() {
        let headers = derive_headers(&sample(), &["transactionID", "status"]);
        assert_eq!(headers, vec!["purpose", "attendees"]);
    }

    #[test]
    fn test_derive_headers_is_idempotent() {
        let record = sample();
        let excluded = ["status"];
        assert_eq!(
            derive_headers(&record, &excluded),
            derive_headers(&record.clone(), &excluded)
        );
    }

    #[test]
    fn test_header_label() {
        assert_eq!(header_label("purpose"), "Purpose");
        assert_eq!(header_label("roomCapacity"), "RoomCapacity");
        assert_eq!(header_label("ëvent"), "Ëvent");
        assert_eq!(header_label(""), "");
    }

    #[test]
    fn test_dynamic_cell_fallback() {
        let record = sample().with("notes", serde_json::Value::Null);
        assert_eq!(dynamic_cell(&record, "purpose"), "Meeting");
        assert_eq!(dynamic_cell(&record, "attendees"), "12");
        assert_eq!(dynamic_cell(&record, "notes"), MISSING_VALUE);
        assert_eq!(dynamic_cell(&record, "absent"), MISSING_VALUE);
    }

    #[test]
    fn test_fields_missing_in_rows() {
        let rows = vec![
            sample(),
            DynamicRecord::new().with("purpose", "Choir").with("attendees", 4),
            DynamicRecord::new().with("attendees", 9),
        ];
        let headers = derive_headers(&rows[0], &["transactionID", "status"]);
        assert_eq!(fields_missing_in_rows(&rows, &headers), vec!["purpose"]);
    }

    #[test]
    fn test_null_values_do_not_make_rows_ragged() {
        let rows = vec![
            DynamicRecord::new().with("purpose", serde_json::Value::Null),
            DynamicRecord::new().with("purpose", serde_json::Value::Null),
        ];
        let headers = derive_headers(&rows[0], &[]);
        assert!(fields_missing_in_rows(&rows, &headers).is_empty());
        assert_eq!(dynamic_cell(&rows[0], "purpose"), MISSING_VALUE);
    }
}
