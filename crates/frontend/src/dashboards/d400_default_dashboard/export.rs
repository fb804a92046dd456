//! Spreadsheet export of the approval table.

use contracts::domain::a002_reservation::ReservationRecord;
use contracts::shared::PageQuery;

use super::columns::Column;
use super::state::QueryState;

pub const EXPORT_FILE_NAME: &str = "ExportedData.xlsx";
pub const EXPORT_SHEET_NAME: &str = "Data";

/// Which rows go into the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportScope {
    /// Rows already on screen.
    #[default]
    CurrentPage,
    /// Every row matching the current date filter, fetched for the export.
    AllFiltered,
}

impl ExportScope {
    pub fn as_value(self) -> &'static str {
        match self {
            ExportScope::CurrentPage => "page",
            ExportScope::AllFiltered => "all",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "all" => ExportScope::AllFiltered,
            _ => ExportScope::CurrentPage,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportScope::CurrentPage => "Current page",
            ExportScope::AllFiltered => "All filtered rows",
        }
    }
}

/// Header row followed by one row per record, in table column order.
pub fn build_export_table(columns: &[Column], rows: &[ReservationRecord]) -> Vec<Vec<String>> {
    let header = columns.iter().map(|c| c.label.clone()).collect();
    std::iter::once(header)
        .chain(
            rows.iter()
                .map(|row| columns.iter().map(|c| c.cell(row)).collect()),
        )
        .collect()
}

/// Query that returns every row of the current filter in one page.
pub fn full_export_query(query: &QueryState, total_data: usize) -> Option<PageQuery> {
    if total_data == 0 {
        return None;
    }
    Some(PageQuery {
        page: 0,
        page_size: total_data,
        search_term: query.search_term.clone(),
    })
}

/// Rows of the filter that a full export did not receive, e.g. when the
/// server caps `pageSize`.
pub fn rows_short_of_total(fetched: usize, total_data: usize) -> usize {
    total_data.saturating_sub(fetched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_default_dashboard::columns::table_columns;
    use crate::shared::paged_data::LoadedPage;
    use contracts::domain::a002_reservation::{ApprovalListResponse, PINNED_FIELDS};

    fn example_response() -> ApprovalListResponse {
        serde_json::from_str(
            r#"{
                "statusCode": 200,
                "data": [{
                    "transactionID": "T1",
                    "reservationDate": "01 Jan 2024",
                    "startTime": "09:00",
                    "roomName": "Hall A",
                    "purpose": "Meeting",
                    "mjMengetahui": "Yes",
                    "createdBy": "Alice",
                    "status": "Approved"
                }],
                "totalData": 1
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_example_page_exports_header_and_one_row() {
        let page = LoadedPage::from_outcome(Ok(example_response()), &PINNED_FIELDS, "test");
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.total_data, 1);
        assert_eq!(page.headers, vec!["purpose"]);

        let columns = table_columns(&page.headers);
        let table = build_export_table(&columns, &page.rows);
        assert_eq!(table.len(), page.rows.len() + 1);
        assert_eq!(
            table[0],
            vec!["Tanggal", "Jam", "Ruangan", "Purpose", "MJ Mengatahui", "Jemaat Peminjaman", "Status"]
        );
        assert_eq!(
            table[1],
            vec!["01 Jan 2024", "09:00", "Hall A", "Meeting", "Yes", "Alice", "Approved"]
        );
    }

    #[test]
    fn test_export_columns_match_table_columns() {
        let headers = vec!["purpose".to_string(), "attendees".to_string()];
        let columns = table_columns(&headers);
        let rows = vec![
            ReservationRecord::new().with("purpose", "Choir"),
            ReservationRecord::new().with("attendees", 30),
        ];
        let table = build_export_table(&columns, &rows);
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|row| row.len() == columns.len()));
        assert_eq!(table[1][4], "N/A");
        assert_eq!(table[2][3], "N/A");
        assert_eq!(table[2][4], "30");
    }

    #[test]
    fn test_empty_page_exports_header_only() {
        let table = build_export_table(&table_columns(&[]), &[]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_full_export_query() {
        let mut query = QueryState::default();
        query.set_page(3);
        query.set_search_term("01 Jan 2024".to_string());

        let full = full_export_query(&query, 137).unwrap();
        assert_eq!(full.page, 0);
        assert_eq!(full.page_size, 137);
        assert_eq!(full.search_term, "01 Jan 2024");

        assert!(full_export_query(&query, 0).is_none());
    }

    #[test]
    fn test_scope_value_roundtrip() {
        for scope in [ExportScope::CurrentPage, ExportScope::AllFiltered] {
            assert_eq!(ExportScope::from_value(scope.as_value()), scope);
        }
        assert_eq!(ExportScope::from_value("bogus"), ExportScope::CurrentPage);
    }

    #[test]
    fn test_rows_short_of_total() {
        assert_eq!(rows_short_of_total(137, 137), 0);
        assert_eq!(rows_short_of_total(100, 137), 37);
        assert_eq!(rows_short_of_total(140, 137), 0);
    }
}
