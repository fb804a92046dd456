use contracts::shared::{DynamicRecord, PagedResponse};

use super::api_error::ApiError;
use super::dynamic_columns::{derive_headers, fields_missing_in_rows};

/// Rows, total count and dynamic headers of the page currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedPage {
    pub rows: Vec<DynamicRecord>,
    pub total_data: usize,
    pub headers: Vec<String>,
}

impl LoadedPage {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Turn the result of a list fetch into what the table shows.
    ///
    /// Only an OK status with at least one row replaces the page. A "no data"
    /// answer, any other status and every transport or decode error all end
    /// in the same empty page.
    pub fn from_outcome(
        outcome: Result<PagedResponse<DynamicRecord>, ApiError>,
        excluded: &[&str],
        source: &str,
    ) -> Self {
        match outcome {
            Ok(response) if response.has_rows() => {
                let headers = response
                    .data
                    .first()
                    .map(|first| derive_headers(first, excluded))
                    .unwrap_or_default();

                let ragged = fields_missing_in_rows(&response.data, &headers);
                if !ragged.is_empty() {
                    log::warn!(
                        "{}: rows differ from the first record, missing {:?}",
                        source,
                        ragged
                    );
                }

                log::debug!(
                    "{}: loaded {} rows of {}",
                    source,
                    response.data.len(),
                    response.total_data
                );
                Self {
                    rows: response.data,
                    total_data: response.total_data,
                    headers,
                }
            }
            Ok(response) => {
                log::debug!("{}: no data (status {})", source, response.status_code);
                Self::empty()
            }
            Err(e) => {
                log::error!("{}: {}", source, e);
                Self::empty()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::paged::{STATUS_NO_DATA, STATUS_OK};

    fn record(id: &str) -> DynamicRecord {
        DynamicRecord::new()
            .with("id", id)
            .with("name", format!("Member {id}"))
            .with("role", "Elder")
    }

    fn response(status: u16, data: Vec<DynamicRecord>, total: usize) -> PagedResponse<DynamicRecord> {
        PagedResponse {
            status_code: status,
            data,
            total_data: total,
        }
    }

    #[test]
    fn test_success_fills_page() {
        let page = LoadedPage::from_outcome(
            Ok(response(STATUS_OK, vec![record("1"), record("2")], 42)),
            &["id"],
            "test",
        );
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total_data, 42);
        assert_eq!(page.headers, vec!["name", "role"]);
    }

    #[test]
    fn test_every_failure_kind_looks_the_same() {
        let outcomes = vec![
            Ok(response(STATUS_OK, vec![], 10)),
            Ok(response(STATUS_NO_DATA, vec![], 0)),
            Ok(response(500, vec![record("1")], 1)),
            Err(ApiError::Network("offline".into())),
            Err(ApiError::Decode("expected value".into())),
            Err(ApiError::Status(502)),
        ];
        for outcome in outcomes {
            let page = LoadedPage::from_outcome(outcome, &["id"], "test");
            assert_eq!(page, LoadedPage::empty());
            assert!(page.rows.is_empty());
            assert_eq!(page.total_data, 0);
            assert!(page.headers.is_empty());
        }
    }
}
