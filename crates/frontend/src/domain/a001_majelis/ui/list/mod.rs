use crate::domain::a001_majelis::api::{delete_majelis, fetch_majelis};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dynamic_columns::{dynamic_cell, header_label};
use crate::shared::icons::icon;
use crate::shared::list_query::{QueryState, PAGE_SIZE_OPTIONS};
use crate::shared::modal::ConfirmModal;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::paged_data::LoadedPage;
use crate::shared::request_sequencer::RequestSequencer;
use contracts::domain::a001_majelis::ID_FIELD;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn MajelisList() -> impl IntoView {
    let query = RwSignal::new(QueryState::default());
    let search_input = RwSignal::new(String::new());
    let loaded = RwSignal::new(LoadedPage::empty());
    let is_loading = RwSignal::new(false);
    let reload = RwSignal::new(0u32);
    let sequencer = StoredValue::new(RequestSequencer::default());

    let pending_delete = RwSignal::new(Option::<String>::None);
    let is_deleting = RwSignal::new(false);
    let delete_error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        reload.track();
        let page_query = query.with(QueryState::to_page_query);
        let Some(ticket) = sequencer.try_update_value(|s| s.issue()) else {
            return;
        };
        is_loading.set(true);

        spawn_local(async move {
            let outcome = fetch_majelis(&page_query).await;
            if sequencer.try_with_value(|s| s.is_current(ticket)) != Some(true) {
                return;
            }
            loaded.set(LoadedPage::from_outcome(outcome, &[ID_FIELD], "majelis"));
            is_loading.set(false);
        });
    });

    let apply_search = move || {
        let term = search_input.get_untracked().trim().to_string();
        query.maybe_update(|q| q.search_from_start(term));
    };

    let on_page_change = Callback::new(move |page: usize| {
        query.maybe_update(|q| q.set_page(page));
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        query.maybe_update(|q| q.set_page_size(size));
    });

    let on_delete_confirm = Callback::new(move |_: ()| {
        let Some(id) = pending_delete.try_update(Option::take).flatten() else {
            return;
        };
        is_deleting.set(true);
        delete_error.set(None);

        spawn_local(async move {
            match delete_majelis(&id).await {
                Ok(()) => {
                    log::info!("majelis {} deleted", id);
                    let rows_on_page = loaded.try_with_untracked(|p| p.rows.len()).unwrap_or(0);
                    let stepped_back = query
                        .try_maybe_update(|q| {
                            let moved = q.step_back_after_removal(rows_on_page);
                            (moved, moved)
                        })
                        .unwrap_or(false);
                    // A page change refetches on its own
                    if !stepped_back {
                        let _ = reload.try_update(|n| *n = n.wrapping_add(1));
                    }
                }
                Err(e) => {
                    log::error!("majelis {} delete failed: {}", id, e);
                    let _ = delete_error.try_set(Some(format!("Failed to delete record {}: {}", id, e)));
                }
            }
            let _ = is_deleting.try_set(false);
        });
    });

    let on_delete_cancel = Callback::new(move |_: ()| pending_delete.set(None));

    view! {
        <PageFrame page_id="a001_majelis--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Data Majelis"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || loaded.with(|p| p.total_data).to_string()}</span>
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search..."
                        prop:value=search_input
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                        on:change=move |_| apply_search()
                    />
                    <PaginationControls
                        current_page=Signal::derive(move || query.with(|q| q.page))
                        total_count=Signal::derive(move || loaded.with(|p| p.total_data))
                        page_size=Signal::derive(move || query.with(|q| q.page_size))
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                        page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                    />
                </div>

                {move || delete_error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {move || {
                                loaded
                                    .with(|p| p.headers.clone())
                                    .into_iter()
                                    .map(|h| {
                                        let label = header_label(&h);
                                        view! { <TableHeaderCell>{label}</TableHeaderCell> }
                                    })
                                    .collect_view()
                            }}
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let page = loaded.get();
                            if page.is_empty() {
                                let text = if is_loading.get() { "Loading…" } else { "No Data Available." };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=(page.headers.len() + 1).to_string()>
                                            <TableCellLayout>
                                                <span class="text-muted">{text}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            let headers = page.headers;
                            page.rows
                                .into_iter()
                                .map(|row| {
                                    let id = row.display(ID_FIELD);
                                    let cells = headers
                                        .iter()
                                        .map(|h| {
                                            let text = dynamic_cell(&row, h);
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view();
                                    let missing_id = id.is_none();

                                    view! {
                                        <TableRow>
                                            {cells}
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=move || missing_id || is_deleting.get()
                                                    on_click=move |_| pending_delete.set(id.clone())
                                                >
                                                    {icon("trash-2")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmModal
                    title="Delete record".to_string()
                    message="This Majelis record will be removed permanently. Continue?".to_string()
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </PageFrame>
    }
}
