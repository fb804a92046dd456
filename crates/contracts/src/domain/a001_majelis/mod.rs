//! Majelis member data served by the `maintainUser` / `Majelis` endpoints.

use crate::shared::{DynamicRecord, PagedResponse};
use serde::{Deserialize, Serialize};

pub type MajelisRecord = DynamicRecord;
pub type MajelisListResponse = PagedResponse<MajelisRecord>;

/// Identity field of a Majelis row; hidden from the table.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMajelisQuery {
    pub id: String,
}
