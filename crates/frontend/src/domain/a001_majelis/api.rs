use contracts::domain::a001_majelis::{DeleteMajelisQuery, MajelisListResponse};
use contracts::shared::PageQuery;

use crate::shared::api_client::{delete_with_query, get_paged};
use crate::shared::api_error::ApiError;

pub const MAJELIS_LIST_PATH: &str = "/maintainUser/getDataMajelis";
pub const MAJELIS_DELETE_PATH: &str = "/Majelis/delete";

pub async fn fetch_majelis(query: &PageQuery) -> Result<MajelisListResponse, ApiError> {
    get_paged(MAJELIS_LIST_PATH, query).await
}

pub async fn delete_majelis(id: &str) -> Result<(), ApiError> {
    let query = DeleteMajelisQuery { id: id.to_string() };
    delete_with_query(MAJELIS_DELETE_PATH, &query).await
}
