use serde::{Deserialize, Deserializer, Serialize};

/// Status code the list endpoints use for a successful page.
pub const STATUS_OK: u16 = 200;
/// Status code the list endpoints use to signal "no data for this query".
pub const STATUS_NO_DATA: u16 = 400;

/// Query parameters shared by the paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: usize,
    pub page_size: usize,
    pub search_term: String,
}

/// Envelope returned by the paginated list endpoints.
///
/// A "no data" answer may leave `data` / `totalData` out or send them as
/// `null`; both read as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagedResponse<T> {
    pub status_code: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_data: usize,
}

fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> PagedResponse<T> {
    /// A page that carries rows the client should show.
    pub fn has_rows(&self) -> bool {
        self.status_code == STATUS_OK && !self.data.is_empty()
    }
}
