use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::{app_routes, AppRoutes};
use crate::system::pages::RouteConfigErrorPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match app_routes() {
        Ok(tree) => {
            // The route tree is frozen here and shared through the global context.
            provide_context(AppGlobalContext::new(tree));
            view! { <AppRoutes /> }.into_any()
        }
        Err(e) => {
            log::error!("invalid route configuration: {}", e);
            view! { <RouteConfigErrorPage message=e.to_string() /> }.into_any()
        }
    }
}
