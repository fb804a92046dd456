//! TopHeader component - application top bar with the sidebar toggle and the
//! title of the current page.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let page_title = move || {
        let path = ctx.current_path.get();
        ctx.routes
            .with_value(|tree| tree.resolve(&path).map(|entry| entry.title))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Majelis Booking"</span>
            </div>
            <div class="top-header__page">{page_title}</div>
        </div>
    }
}
