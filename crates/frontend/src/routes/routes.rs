use crate::dashboards::d400_default_dashboard::ui::DefaultDashboard;
use crate::domain::a001_majelis::ui::list::MajelisList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::{RouteEntry, RouteTree, RouteTreeError};
use crate::system::pages::NotFoundPage;
use leptos::prelude::*;

/// Navigation tree of the private area.
pub fn app_routes() -> Result<RouteTree, RouteTreeError> {
    RouteTree::new(vec![
        RouteEntry::page("dashboard", "Dashboard", "/dashboard", || {
            view! { <DefaultDashboard /> }.into_any()
        })
        .with_description("Reservation approvals")
        .with_icon("layout-dashboard")
        .with_divider(),
        RouteEntry::group(
            "majelis",
            "Majelis",
            vec![RouteEntry::page("majelis_data", "Data Majelis", "/majelis", || {
                view! { <MajelisList /> }.into_any()
            })
            .with_description("Majelis member data")
            .with_icon("users")],
        )
        .with_icon("calendar")
        .expanded(),
    ])
}

/// Mounts the page for the current path, inside the shell unless the route
/// opts out with `no_layout`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    let active_key = Memo::new(move |_| {
        let path = ctx.current_path.get();
        ctx.routes
            .with_value(|tree| tree.resolve(&path).map(|entry| entry.key))
    });

    let bare = Memo::new(move |_| {
        active_key
            .get()
            .and_then(|key| ctx.routes.with_value(|tree| tree.find(key).map(|e| e.no_layout)))
            .unwrap_or(false)
    });

    let page = move || -> AnyView {
        let render = active_key
            .get()
            .and_then(|key| ctx.routes.with_value(|tree| tree.find(key).and_then(|e| e.render)));
        match render {
            Some(render) => render(),
            None => view! { <NotFoundPage /> }.into_any(),
        }
    };

    view! {
        <Show
            when=move || bare.get()
            fallback=move || view! {
                <Shell
                    left=|| view! { <Sidebar /> }.into_any()
                    center=page
                />
            }
        >
            {page}
        </Show>
    }
}
