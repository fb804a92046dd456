use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let home = ctx.routes.with_value(|tree| tree.default_path());

    view! {
        <PageFrame page_id="sys_not_found--system" category=PageCategory::System>
            <div class="page__header">
                <h1 class="page__title">"Page not found"</h1>
            </div>
            <div class="page__content">
                <p>{move || format!("Nothing lives at {}.", ctx.current_path.get())}</p>
                {home.map(|path| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(path)>
                        "Back to dashboard"
                    </Button>
                })}
            </div>
        </PageFrame>
    }
}

/// Shown instead of the app when the route tree fails validation.
#[component]
pub fn RouteConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <PageFrame page_id="sys_route_config--system" category=PageCategory::System>
            <div class="page__header">
                <h1 class="page__title">"Navigation is misconfigured"</h1>
            </div>
            <div class="page__content">
                <pre class="error-message">{message}</pre>
            </div>
        </PageFrame>
    }
}
