//! Declarative navigation tree of the private area.
//!
//! The tree is built once at startup by [`super::routes::app_routes`] and never
//! mutated afterwards. The router resolves URL paths against it and the sidebar
//! renders its menu from it.

use leptos::prelude::AnyView;
use std::collections::HashSet;
use thiserror::Error;

/// Mounts the page of a route.
pub type RenderFn = fn() -> AnyView;

#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Unique across the whole tree.
    pub key: &'static str,
    pub title: &'static str,
    /// Tooltip text for the menu item.
    pub description: Option<&'static str>,
    /// Absent for group headers.
    pub path: Option<&'static str>,
    pub render: Option<RenderFn>,
    pub is_enabled: bool,
    /// Name understood by `shared::icons::icon`.
    pub icon: Option<&'static str>,
    pub children: Vec<RouteEntry>,
    pub append_divider: bool,
    /// Group starts open in the menu.
    pub expanded: bool,
    /// Page is mounted without the application shell.
    pub no_layout: bool,
}

impl RouteEntry {
    fn blank(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            description: None,
            path: None,
            render: None,
            is_enabled: true,
            icon: None,
            children: Vec::new(),
            append_divider: false,
            expanded: false,
            no_layout: false,
        }
    }

    /// A routable page.
    pub fn page(key: &'static str, title: &'static str, path: &'static str, render: RenderFn) -> Self {
        Self {
            path: Some(path),
            render: Some(render),
            ..Self::blank(key, title)
        }
    }

    /// A menu group header holding sub-routes.
    pub fn group(key: &'static str, title: &'static str, children: Vec<RouteEntry>) -> Self {
        Self {
            children,
            ..Self::blank(key, title)
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    pub fn with_divider(mut self) -> Self {
        self.append_divider = true;
        self
    }

    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    pub fn without_layout(mut self) -> Self {
        self.no_layout = true;
        self
    }

    pub fn is_routable(&self) -> bool {
        self.path.is_some() && self.render.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTreeError {
    #[error("route {title:?} has an empty key")]
    EmptyKey { title: &'static str },
    #[error("duplicate route key {0:?}")]
    DuplicateKey(&'static str),
    #[error("duplicate route path {0:?}")]
    DuplicatePath(&'static str),
    #[error("route path {0:?} must start with '/'")]
    RelativePath(&'static str),
    #[error("route {0:?} has a path but nothing to render")]
    MissingRender(&'static str),
}

/// Menu item as the sidebar draws it: enabled entries only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub key: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub path: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub append_divider: bool,
    pub expanded: bool,
    pub children: Vec<MenuNode>,
}

#[derive(Debug, Clone)]
pub struct RouteTree {
    roots: Vec<RouteEntry>,
}

impl RouteTree {
    /// Validates and freezes the tree.
    ///
    /// Keys and paths must be unique across the whole tree, every path must be
    /// absolute and every path needs something to render.
    pub fn new(roots: Vec<RouteEntry>) -> Result<Self, RouteTreeError> {
        let tree = Self { roots };

        let mut keys = HashSet::new();
        let mut paths = HashSet::new();
        for entry in tree.entries() {
            if entry.key.trim().is_empty() {
                return Err(RouteTreeError::EmptyKey { title: entry.title });
            }
            if !keys.insert(entry.key) {
                return Err(RouteTreeError::DuplicateKey(entry.key));
            }
            if let Some(path) = entry.path {
                if !path.starts_with('/') {
                    return Err(RouteTreeError::RelativePath(path));
                }
                if !paths.insert(normalize_path(path)) {
                    return Err(RouteTreeError::DuplicatePath(path));
                }
                if entry.render.is_none() {
                    return Err(RouteTreeError::MissingRender(entry.key));
                }
            }
        }

        Ok(tree)
    }

    /// Every entry, depth-first pre-order, disabled ones included.
    pub fn entries(&self) -> Vec<&RouteEntry> {
        let mut out = Vec::new();
        collect(&self.roots, false, &mut out);
        out
    }

    /// `(path, entry)` for every reachable page, depth-first pre-order.
    ///
    /// A page is reachable when it and all of its ancestors are enabled.
    pub fn flatten(&self) -> Vec<(&'static str, &RouteEntry)> {
        let mut enabled = Vec::new();
        collect(&self.roots, true, &mut enabled);
        enabled
            .into_iter()
            .filter(|entry| entry.is_routable())
            .filter_map(|entry| entry.path.map(|path| (path, entry)))
            .collect()
    }

    /// Reachable page for a URL path; a trailing slash is ignored.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        let wanted = normalize_path(path);
        self.flatten()
            .into_iter()
            .find(|(candidate, _)| normalize_path(candidate) == wanted)
            .map(|(_, entry)| entry)
    }

    pub fn find(&self, key: &str) -> Option<&RouteEntry> {
        self.entries().into_iter().find(|entry| entry.key == key)
    }

    /// Landing page: the first reachable path.
    pub fn default_path(&self) -> Option<&'static str> {
        self.flatten().first().map(|(path, _)| *path)
    }

    pub fn menu(&self) -> Vec<MenuNode> {
        menu_nodes(&self.roots)
    }
}

fn collect<'a>(entries: &'a [RouteEntry], enabled_only: bool, out: &mut Vec<&'a RouteEntry>) {
    for entry in entries {
        if enabled_only && !entry.is_enabled {
            continue;
        }
        out.push(entry);
        collect(&entry.children, enabled_only, out);
    }
}

fn menu_nodes(entries: &[RouteEntry]) -> Vec<MenuNode> {
    entries
        .iter()
        .filter(|entry| entry.is_enabled)
        .map(|entry| MenuNode {
            key: entry.key,
            title: entry.title,
            description: entry.description,
            path: entry.path,
            icon: entry.icon,
            append_divider: entry.append_divider,
            expanded: entry.expanded,
            children: menu_nodes(&entry.children),
        })
        .collect()
}

/// `/a/b/` and `/a/b` name the same page; `/` stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;

    fn blank_page() -> AnyView {
        view! { <div></div> }.into_any()
    }

    fn sample_tree() -> Vec<RouteEntry> {
        vec![
            RouteEntry::page("dashboard", "Dashboard", "/dashboard", blank_page)
                .with_icon("layout-dashboard")
                .with_divider(),
            RouteEntry::group(
                "majelis",
                "Majelis",
                vec![
                    RouteEntry::page("majelis-data", "Data Majelis", "/majelis", blank_page),
                    RouteEntry::page("majelis-archive", "Archive", "/majelis/archive", blank_page)
                        .disabled(),
                ],
            )
            .expanded(),
            RouteEntry::group(
                "reports",
                "Reports",
                vec![RouteEntry::page("monthly", "Monthly", "/reports/monthly", blank_page)],
            )
            .disabled(),
            RouteEntry::page("print", "Print", "/print", blank_page).without_layout(),
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let entry = RouteEntry::page("k", "Title", "/k", blank_page);
        assert!(entry.is_enabled);
        assert!(!entry.append_divider);
        assert!(!entry.expanded);
        assert!(!entry.no_layout);
        assert!(entry.is_routable());

        let group = RouteEntry::group("g", "Group", vec![]);
        assert!(group.path.is_none());
        assert!(!group.is_routable());
    }

    #[test]
    fn test_flatten_is_preorder_and_skips_disabled_subtrees() {
        let tree = RouteTree::new(sample_tree()).unwrap();
        let paths: Vec<&str> = tree.flatten().into_iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["/dashboard", "/majelis", "/print"]);
    }

    #[test]
    fn test_resolve() {
        let tree = RouteTree::new(sample_tree()).unwrap();
        assert_eq!(tree.resolve("/majelis").map(|e| e.key), Some("majelis-data"));
        assert_eq!(tree.resolve("/majelis/").map(|e| e.key), Some("majelis-data"));
        assert!(tree.resolve("/majelis/archive").is_none());
        assert!(tree.resolve("/reports/monthly").is_none());
        assert!(tree.resolve("/nope").is_none());
        assert!(tree.resolve("/print").map(|e| e.no_layout).unwrap_or(false));
    }

    #[test]
    fn test_default_path_and_find() {
        let tree = RouteTree::new(sample_tree()).unwrap();
        assert_eq!(tree.default_path(), Some("/dashboard"));
        assert_eq!(tree.find("monthly").map(|e| e.title), Some("Monthly"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_duplicate_key_rejected_across_levels() {
        let roots = vec![
            RouteEntry::page("dashboard", "Dashboard", "/dashboard", blank_page),
            RouteEntry::group(
                "group",
                "Group",
                vec![RouteEntry::page("dashboard", "Again", "/again", blank_page)],
            ),
        ];
        assert_eq!(
            RouteTree::new(roots).unwrap_err(),
            RouteTreeError::DuplicateKey("dashboard")
        );
    }

    #[test]
    fn test_duplicate_path_rejected_ignoring_trailing_slash() {
        let roots = vec![
            RouteEntry::page("a", "A", "/same", blank_page),
            RouteEntry::page("b", "B", "/same/", blank_page),
        ];
        assert_eq!(
            RouteTree::new(roots).unwrap_err(),
            RouteTreeError::DuplicatePath("/same/")
        );
    }

    #[test]
    fn test_invalid_entries_rejected() {
        let relative = vec![RouteEntry::page("a", "A", "dashboard", blank_page)];
        assert_eq!(
            RouteTree::new(relative).unwrap_err(),
            RouteTreeError::RelativePath("dashboard")
        );

        let empty_key = vec![RouteEntry::page(" ", "Nameless", "/x", blank_page)];
        assert_eq!(
            RouteTree::new(empty_key).unwrap_err(),
            RouteTreeError::EmptyKey { title: "Nameless" }
        );

        let mut no_render = RouteEntry::group("g", "Group", vec![]);
        no_render.path = Some("/g");
        assert_eq!(
            RouteTree::new(vec![no_render]).unwrap_err(),
            RouteTreeError::MissingRender("g")
        );
    }

    #[test]
    fn test_menu_keeps_hints_and_drops_disabled() {
        let tree = RouteTree::new(sample_tree()).unwrap();
        let menu = tree.menu();
        let keys: Vec<&str> = menu.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec!["dashboard", "majelis", "print"]);

        assert!(menu[0].append_divider);
        assert!(menu[1].expanded);
        let children: Vec<&str> = menu[1].children.iter().map(|n| n.key).collect();
        assert_eq!(children, vec!["majelis-data"]);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/a/"), "/a");
        assert_eq!(normalize_path("/a"), "/a");
    }
}
