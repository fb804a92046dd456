//! Sidebar menu drawn from the route tree.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::MenuNode;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Keys of the groups flagged `expanded`, at any depth.
pub fn initially_expanded(nodes: &[MenuNode]) -> Vec<&'static str> {
    let mut keys = Vec::new();
    for node in nodes {
        if node.expanded && !node.children.is_empty() {
            keys.push(node.key);
        }
        keys.extend(initially_expanded(&node.children));
    }
    keys
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let menu = ctx.routes.with_value(|tree| tree.menu());
    let expanded_groups = RwSignal::new(initially_expanded(&menu));

    view! {
        <nav class="app-sidebar__content">
            {menu
                .into_iter()
                .map(|node| render_node(node, 0, ctx, expanded_groups))
                .collect_view()}
        </nav>
    }
}

fn render_node(
    node: MenuNode,
    depth: usize,
    ctx: AppGlobalContext,
    expanded_groups: RwSignal<Vec<&'static str>>,
) -> AnyView {
    let key = node.key;
    let path = node.path;
    let has_children = !node.children.is_empty();
    let children = StoredValue::new(node.children);

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || path.map(|p| ctx.is_active(p)).unwrap_or(false)
                style:padding-left=format!("{}px", 12 + depth * 14)
                title=node.description.unwrap_or_default()
                on:click=move |_| {
                    if has_children {
                        expanded_groups.update(|keys| {
                            if let Some(pos) = keys.iter().position(|k| *k == key) {
                                keys.remove(pos);
                            } else {
                                keys.push(key);
                            }
                        });
                    } else if let Some(p) = path {
                        ctx.navigate(p);
                    }
                }
            >
                <div class="app-sidebar__item-content">
                    {node.icon.map(icon)}
                    <span>{node.title}</span>
                </div>
                {has_children.then(|| view! {
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&key)
                    >
                        {icon("chevron-right")}
                    </div>
                })}
            </div>

            {has_children.then(|| view! {
                <Show when=move || expanded_groups.get().contains(&key)>
                    <div class="app-sidebar__children">
                        {children
                            .get_value()
                            .into_iter()
                            .map(|child| render_node(child, depth + 1, ctx, expanded_groups))
                            .collect_view()}
                    </div>
                </Show>
            })}

            {node.append_divider.then(|| view! { <hr class="app-sidebar__divider" /> })}
        </div>
    }
    .into_any()
}
