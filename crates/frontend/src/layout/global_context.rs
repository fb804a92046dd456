use crate::routes::route::normalize_path;
use crate::routes::RouteTree;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// App-wide state: the route tree, the current URL path and shell toggles.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub routes: StoredValue<RouteTree>,
    pub current_path: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(routes: RouteTree) -> Self {
        Self {
            routes: StoredValue::new(routes),
            current_path: RwSignal::new("/".to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Reads the path from the address bar and follows back/forward
    /// navigation. Runs once when the router mounts.
    pub fn init_router_integration(&self) {
        let path = location_path();
        let target = self.routes.with_value(|tree| landing_path(tree, &path));
        if target != path {
            replace_history(&target);
        }
        self.current_path.set(target);

        let this = *self;
        let popstate = window_event_listener(ev::popstate, move |_| {
            let path = location_path();
            let target = this.routes.with_value(|tree| landing_path(tree, &path));
            this.current_path.set(target);
        });
        on_cleanup(move || popstate.remove());
    }

    pub fn navigate(&self, path: &str) {
        if self.current_path.with_untracked(|current| current == path) {
            return;
        }
        leptos::logging::log!("navigate: '{}'", path);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
            }
        }
        self.current_path.set(path.to_string());
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.current_path
            .with(|current| normalize_path(current) == normalize_path(path))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

/// The site root lands on the first reachable page; anything else is kept so
/// unknown paths reach the not-found page.
pub fn landing_path(tree: &RouteTree, path: &str) -> String {
    if normalize_path(path) == "/" {
        if let Some(default) = tree.default_path() {
            return default.to_string();
        }
    }
    path.to_string()
}

fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn replace_history(path: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}
