use contracts::domain::a002_reservation::ApprovalListResponse;
use contracts::shared::PageQuery;

use crate::shared::api_client::get_paged;
use crate::shared::api_error::ApiError;

pub const APPROVAL_LIST_PATH: &str = "/reservation/getDataApproval";

/// Fetch one page of reservation approvals.
pub async fn fetch_approvals(query: &PageQuery) -> Result<ApprovalListResponse, ApiError> {
    get_paged(APPROVAL_LIST_PATH, query).await
}
