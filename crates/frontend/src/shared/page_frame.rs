//! Root wrapper for every routed page.
//!
//! The root element carries `id="{entity}--{category}"` (for example
//! `d400_default_dashboard--dashboard`) and `data-page-category`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters and pagination.
    List,
    Dashboard,
    /// Error pages and other shell-level screens.
    System,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Dashboard => "dashboard",
            PageCategory::System => "system",
        }
    }

    fn class(self) -> &'static str {
        match self {
            PageCategory::Dashboard => "page page--dashboard",
            PageCategory::List | PageCategory::System => "page",
        }
    }
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div id=page_id class=category.class() data-page-category=category.as_str()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_majelis--list"));
        assert!(!is_valid_page_id("a001_majelis"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_majelis--"));
    }
}
