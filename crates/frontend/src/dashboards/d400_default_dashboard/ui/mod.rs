use contracts::domain::a002_reservation::{fields, PINNED_FIELDS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::fetch_approvals;
use super::columns::{find_row, row_key, table_columns};
use super::export::{
    build_export_table, full_export_query, rows_short_of_total, ExportScope, EXPORT_FILE_NAME,
    EXPORT_SHEET_NAME,
};
use super::state::{DownloadPrompt, QueryState, PAGE_SIZE_OPTIONS};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::search_term_for_input;
use crate::shared::export::export_to_xlsx;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmModal;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::paged_data::LoadedPage;
use crate::shared::request_sequencer::RequestSequencer;

fn save_workbook(table: &[Vec<String>]) {
    if table.len() < 2 {
        log::warn!("export skipped: no rows to export");
        return;
    }
    match export_to_xlsx(table, EXPORT_SHEET_NAME, EXPORT_FILE_NAME) {
        Ok(()) => log::info!("exported {} rows to {}", table.len() - 1, EXPORT_FILE_NAME),
        Err(e) => log::error!("export failed: {}", e),
    }
}

#[component]
pub fn DefaultDashboard() -> impl IntoView {
    let query = RwSignal::new(QueryState::default());
    let selected_date = RwSignal::new(String::new());
    let loaded = RwSignal::new(LoadedPage::empty());
    let is_loading = RwSignal::new(false);
    let export_scope = RwSignal::new(ExportScope::default());
    let is_exporting = RwSignal::new(false);
    let download = RwSignal::new(DownloadPrompt::Closed);
    let sequencer = StoredValue::new(RequestSequencer::default());

    // Re-fetch whenever page, page size or search term change
    Effect::new(move |_| {
        let page_query = query.with(QueryState::to_page_query);
        let Some(ticket) = sequencer.try_update_value(|s| s.issue()) else {
            return;
        };
        is_loading.set(true);

        spawn_local(async move {
            let outcome = fetch_approvals(&page_query).await;
            if sequencer.try_with_value(|s| s.is_current(ticket)) != Some(true) {
                log::debug!("approvals: dropping stale response for page {}", page_query.page);
                return;
            }
            loaded.set(LoadedPage::from_outcome(outcome, &PINNED_FIELDS, "approvals"));
            is_loading.set(false);
        });
    });

    let columns = Memo::new(move |_| loaded.with(|p| table_columns(&p.headers)));

    let on_date_change = Callback::new(move |value: String| {
        let term = search_term_for_input(&value);
        selected_date.set(value);
        query.maybe_update(|q| q.set_search_term(term));
    });

    let on_page_change = Callback::new(move |page: usize| {
        query.maybe_update(|q| q.set_page(page));
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        query.maybe_update(|q| q.set_page_size(size));
    });

    let run_export = move || {
        if is_exporting.get_untracked() {
            return;
        }
        match export_scope.get_untracked() {
            ExportScope::CurrentPage => {
                let table = loaded
                    .with_untracked(|p| build_export_table(&table_columns(&p.headers), &p.rows));
                save_workbook(&table);
            }
            ExportScope::AllFiltered => {
                let total = loaded.with_untracked(|p| p.total_data);
                let Some(full_query) = query.with_untracked(|q| full_export_query(q, total)) else {
                    log::warn!("export skipped: no rows to export");
                    return;
                };
                is_exporting.set(true);
                spawn_local(async move {
                    let outcome = fetch_approvals(&full_query).await;
                    let page = LoadedPage::from_outcome(outcome, &PINNED_FIELDS, "approvals export");
                    let missing = rows_short_of_total(page.rows.len(), total);
                    if missing > 0 {
                        log::warn!(
                            "export: server returned {} of {} rows, {} missing from the file",
                            page.rows.len(),
                            total,
                            missing
                        );
                    }
                    let table = build_export_table(&table_columns(&page.headers), &page.rows);
                    save_workbook(&table);
                    let _ = is_exporting.try_set(false);
                });
            }
        }
    };

    let on_download_confirm = Callback::new(move |_: ()| {
        if let Some(transaction_id) = download.try_update(|d| d.confirm()).flatten() {
            // No document service yet; the request is only recorded.
            log::info!("download requested for transaction {}", transaction_id);
        }
    });

    let on_download_cancel = Callback::new(move |_: ()| download.update(|d| d.dismiss()));

    view! {
        <PageFrame page_id="d400_default_dashboard--dashboard" category=PageCategory::Dashboard>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layout-dashboard")}
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <select
                        class="export-scope-select"
                        title="Rows to export"
                        prop:value=move || export_scope.get().as_value()
                        on:change=move |ev| export_scope.set(ExportScope::from_value(&event_target_value(&ev)))
                    >
                        {[ExportScope::CurrentPage, ExportScope::AllFiltered]
                            .into_iter()
                            .map(|scope| view! { <option value=scope.as_value()>{scope.label()}</option> })
                            .collect_view()}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| run_export()
                        disabled=move || is_exporting.get() || loaded.with(LoadedPage::is_empty)
                    >
                        {icon("excel")}
                        {move || if is_exporting.get() { " Exporting..." } else { " Export to Excel" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <DateInput value=selected_date on_change=on_date_change />
                    <PaginationControls
                        current_page=Signal::derive(move || query.with(|q| q.page))
                        total_count=Signal::derive(move || loaded.with(|p| p.total_data))
                        page_size=Signal::derive(move || query.with(|q| q.page_size))
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                        page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                    />
                </div>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .map(|col| view! { <TableHeaderCell>{col.label}</TableHeaderCell> })
                                    .collect_view()
                            }}
                            <TableHeaderCell>"Download"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <Show when=move || loaded.with(LoadedPage::is_empty)>
                            <TableRow>
                                <TableCell attr:colspan=move || (columns.with(Vec::len) + 1).to_string()>
                                    <TableCellLayout>
                                        <span class="text-muted">
                                            {move || if is_loading.get() { "Loading…" } else { "No Data Available." }}
                                        </span>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </Show>
                        <For
                            each=move || loaded.with(|p| p.rows.clone().into_iter().enumerate().collect::<Vec<_>>())
                            key=|(index, row)| row_key(*index, row)
                            children=move |(index, row)| {
                                let key = row_key(index, &row);
                                let transaction_id = row.display(fields::TRANSACTION_ID).unwrap_or_default();
                                view! {
                                    <TableRow>
                                        // Same key across refetches keeps the row; cells follow the latest record
                                        {move || {
                                            let cols = columns.get();
                                            loaded.with(|p| {
                                                let current = find_row(&p.rows, &key).unwrap_or(&row);
                                                cols.iter()
                                                    .map(|col| {
                                                        let text = col.cell(current);
                                                        view! {
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                            </TableCell>
                                                        }
                                                    })
                                                    .collect_view()
                                            })
                                        }}
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| download.set(DownloadPrompt::open(transaction_id.clone()))
                                            >
                                                {icon("download")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <Show when=move || download.with(DownloadPrompt::is_open)>
                {move || {
                    let transaction_id = download
                        .with(|d| d.transaction_id().map(str::to_string))
                        .unwrap_or_default();
                    view! {
                        <ConfirmModal
                            title="Confirm download".to_string()
                            message=format!("Download the document for transaction {}?", transaction_id)
                            confirm_label="Download"
                            on_confirm=on_download_confirm
                            on_cancel=on_download_cancel
                        />
                    }
                }}
            </Show>
        </PageFrame>
    }
}
