//! API utilities for frontend-backend communication
//!
//! The API host is fixed at build time: set `MAJELIS_API_BASE_URL` when running
//! `trunk build` to point the bundle at another server.

/// Base URL used when no override is compiled in.
pub const DEFAULT_API_BASE: &str = "https://localhost:7152/api";

/// Get the base URL for API requests, without a trailing slash.
pub fn api_base() -> String {
    resolve_api_base(option_env!("MAJELIS_API_BASE_URL"))
}

fn resolve_api_base(override_url: Option<&str>) -> String {
    match override_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => DEFAULT_API_BASE.to_string(),
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/Majelis/delete");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(resolve_api_base(None), DEFAULT_API_BASE);
        assert_eq!(resolve_api_base(Some("   ")), DEFAULT_API_BASE);
    }

    #[test]
    fn test_override_trims_trailing_slash() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.org/api/")),
            "https://api.example.org/api"
        );
    }
}
