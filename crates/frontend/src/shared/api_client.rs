//! Thin request helpers over `gloo-net` shared by the list pages.

use contracts::shared::{DynamicRecord, PageQuery, PagedResponse};
use gloo_net::http::Request;
use serde::Serialize;

use super::api_error::ApiError;
use super::api_utils::api_url;

fn url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{}?{}", api_url(path), qs))
}

/// Fetch one page from a paginated list endpoint.
///
/// The list endpoints answer "no data" with HTTP 400 and a regular envelope,
/// so the body is decoded before the status is judged.
pub async fn get_paged(
    path: &str,
    query: &PageQuery,
) -> Result<PagedResponse<DynamicRecord>, ApiError> {
    let url = url_with_query(path, query)?;
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match response.json::<PagedResponse<DynamicRecord>>().await {
        Ok(body) => Ok(body),
        Err(e) if response.ok() => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status(response.status())),
    }
}

/// Send a DELETE with query parameters; any 2xx counts as success.
pub async fn delete_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<(), ApiError> {
    let url = url_with_query(path, query)?;
    log::debug!("DELETE {}", url);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}
