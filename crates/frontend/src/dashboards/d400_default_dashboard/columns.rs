//! Column layout of the approval table.
//!
//! Three pinned columns lead, the dynamic columns of the page follow, three
//! more pinned columns close the row. Export uses the same order.

use contracts::domain::a002_reservation::{fields, ReservationRecord};

use crate::shared::dynamic_columns::{dynamic_cell, header_label};

const LEADING: [(&str, &str); 3] = [
    (fields::RESERVATION_DATE, "Tanggal"),
    (fields::START_TIME, "Jam"),
    (fields::ROOM_NAME, "Ruangan"),
];

const TRAILING: [(&str, &str); 3] = [
    (fields::MJ_MENGETAHUI, "MJ Mengatahui"),
    (fields::CREATED_BY, "Jemaat Peminjaman"),
    (fields::STATUS, "Status"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    Pinned,
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: String,
    pub label: String,
    pub source: ColumnSource,
}

impl Column {
    fn pinned((field, label): (&str, &str)) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            source: ColumnSource::Pinned,
        }
    }

    fn dynamic(field: &str) -> Self {
        Self {
            field: field.to_string(),
            label: header_label(field),
            source: ColumnSource::Dynamic,
        }
    }

    /// Cell text; a missing pinned field is blank, a missing dynamic one `N/A`.
    pub fn cell(&self, record: &ReservationRecord) -> String {
        match self.source {
            ColumnSource::Pinned => record.display(&self.field).unwrap_or_default(),
            ColumnSource::Dynamic => dynamic_cell(record, &self.field),
        }
    }
}

/// Render key of a table row: its `transactionID`, or the row position when
/// the server left it out.
pub fn row_key(index: usize, record: &ReservationRecord) -> String {
    record
        .display(fields::TRANSACTION_ID)
        .unwrap_or_else(|| format!("#{}", index))
}

/// Row of `rows` whose [`row_key`] is `key`.
pub fn find_row<'a>(rows: &'a [ReservationRecord], key: &str) -> Option<&'a ReservationRecord> {
    rows.iter()
        .enumerate()
        .find(|(index, row)| row_key(*index, row) == key)
        .map(|(_, row)| row)
}

/// Full column list for the dynamic `headers` of a page.
pub fn table_columns(headers: &[String]) -> Vec<Column> {
    LEADING
        .into_iter()
        .map(Column::pinned)
        .chain(headers.iter().map(|h| Column::dynamic(h)))
        .chain(TRAILING.into_iter().map(Column::pinned))
        .collect()
}
