pub mod state;

use self::state::create_state;
use super::availability_class;
use super::details::MaidDetails;
use super::filters::MaidFilterPanel;
use crate::domain::a001_maid::api;
use crate::domain::a002_recommendation::ui::RecommendationPanel;
use crate::shared::components::table::{
    HeaderSelectionCheckbox, RowSelectionCheckbox, SortableHeaderCell,
};
use crate::shared::date_utils::use_today;
use crate::shared::format::{format_list, format_measure, format_opt_amount, EMPTY_CELL};
use crate::shared::icons::icon;
use crate::shared::list_utils::{next_sort, SearchInput};
use crate::shared::notices::use_notices;
use crate::system::session::use_session;
use contracts::domain::a001_maid::{normalize_all, MaidDto, MaidRecord};
use contracts::shared::maid_filter::{FilterState, SortField};
use contracts::shared::search::{SearchController, SearchDispatch, SearchResolution};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// What the details modal is open for.
#[derive(Debug, Clone, PartialEq)]
enum EditTarget {
    New,
    Existing(MaidDto),
}

/// Admin dashboard: search, filters, sortable table, writes and
/// recommendation links.
#[component]
pub fn MaidList() -> impl IntoView {
    let state = create_state();
    let search = RwSignal::new(SearchController::new());
    let editing = RwSignal::new(None::<EditTarget>);
    let session = use_session();
    let notices = use_notices();

    let run_dispatch = Callback::new(move |dispatch: SearchDispatch| {
        log::debug!("request #{}: {:?}", dispatch.request_id, dispatch.request);
        spawn_local(async move {
            let result = api::run_search(&dispatch.request).await;
            match search.try_update(|c| c.resolve(dispatch.request_id, result)) {
                Some(SearchResolution::Apply(dtos)) => {
                    session.confirm();
                    let records = normalize_all(&dtos);
                    log::debug!(
                        "request #{}: {} records ({} skipped)",
                        dispatch.request_id,
                        records.len(),
                        dtos.len() - records.len()
                    );
                    let _ = state.try_update(|s| s.replace_records(records));
                }
                Some(SearchResolution::Failed(err)) => {
                    log::warn!("request #{} failed: {}", dispatch.request_id, err);
                    if !session.report(&err) {
                        notices.error(err.user_message());
                    }
                }
                Some(SearchResolution::Stale) | None => {
                    log::warn!("request #{} superseded, response dropped", dispatch.request_id);
                }
            }
        });
    });

    let refresh = move || {
        if let Some(dispatch) = search.try_update(|c| c.refresh()) {
            run_dispatch.run(dispatch);
        }
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            refresh();
        }
    });

    let today = use_today();
    let visible = Memo::new(move |_| {
        let today = today.get();
        state.with(|s| s.visible_on(today))
    });
    let visible_ids =
        Signal::derive(move || visible.with(|v| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>()));
    let records = Signal::derive(move || state.with(|s| s.records.clone()));
    let filters = Signal::derive(move || state.with(|s| s.filters.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_ids.clone()));
    let selected_ordered = Signal::derive(move || state.with(|s| s.selected_in_order()));
    let sort = Signal::derive(move || state.with(|s| (s.sort_field, s.sort_ascending)));

    let on_filters = Callback::new(move |next: FilterState| {
        state.update(|s| s.filters = next);
    });

    let on_sort = Callback::new(move |field: SortField| {
        state.update(|s| {
            let (f, ascending) = next_sort((s.sort_field, s.sort_ascending), field);
            s.sort_field = f;
            s.sort_ascending = ascending;
        });
    });

    let toggle_selection = Callback::new(move |(id, checked): (String, bool)| {
        state.update(|s| s.set_selected(id, checked));
    });

    let toggle_visible = Callback::new(move |checked: bool| {
        let ids = visible_ids.get_untracked();
        state.update(|s| s.set_selected_many(&ids, checked));
    });

    let clear_selection = Callback::new(move |_: ()| {
        state.update(|s| s.selected_ids.clear());
    });

    let delete_record = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete {}?", name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_maid(&id).await {
                Ok(()) => {
                    notices.success(format!("{} deleted", name));
                    refresh();
                }
                Err(e) => {
                    log::warn!("deleting {} failed: {}", id, e);
                    if !session.report(&e) {
                        notices.error(e.user_message());
                    }
                }
            }
        });
    };

    let row = move |record: MaidRecord| {
        let availability = record.availability();
        let age = record
            .age_on(today.get_untracked())
            .map(|a| a.to_string())
            .unwrap_or_else(|| EMPTY_CELL.to_string());
        let edit_source = record.source.clone();
        let delete_id = record.id.clone();
        let delete_name = record.name.clone();

        view! {
            <TableRow>
                <RowSelectionCheckbox
                    item_id=record.id.clone()
                    selected=selected
                    on_change=toggle_selection
                />
                <TableCell>
                    <TableCellLayout truncate=true>
                        <a
                            href="#"
                            class="table__link"
                            on:click=move |e| {
                                e.prevent_default();
                                editing.set(Some(EditTarget::Existing(edit_source.clone())));
                            }
                        >
                            {record.name.clone()}
                        </a>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {record.nationality.clone().unwrap_or_else(|| EMPTY_CELL.to_string())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{age}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{format_measure(record.height, "cm")}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{format_measure(record.weight, "kg")}</TableCellLayout>
                </TableCell>
                <TableCell class="table__cell--right">
                    <TableCellLayout>{format_opt_amount(record.salary)}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <span class=availability_class(availability)>{availability.as_str()}</span>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{format_list(&record.skills)}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <button
                        class="button button--icon"
                        title="Delete"
                        on:click=move |_| delete_record(delete_id.clone(), delete_name.clone())
                    >
                        {icon("trash")}
                    </button>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Maids"</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.records.len())}
                    </span>
                </div>
                <div class="page__header-right">
                    <SearchInput controller=search on_dispatch=run_dispatch />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh()
                        disabled=Signal::derive(move || search.with(|c| c.is_searching()))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(EditTarget::New))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                </div>
            </div>

            <MaidFilterPanel
                records=records
                filters=filters
                on_change=on_filters
                shown=Signal::derive(move || visible.with(|v| v.len()))
            />

            <RecommendationPanel selected=selected_ordered on_clear_selection=clear_selection />

            <div class="table-wrapper">
                <Table attr:style="width: 100%; min-width: 1000px;">
                    <TableHeader>
                        <TableRow>
                            <HeaderSelectionCheckbox
                                visible_ids=visible_ids
                                selected=selected
                                on_change=toggle_visible
                            />
                            <SortableHeaderCell label="Name" field=SortField::Name sort=sort on_sort=on_sort min_width=160.0 />
                            <SortableHeaderCell label="Nationality" field=SortField::Nationality sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Age" field=SortField::Age sort=sort on_sort=on_sort min_width=70.0 />
                            <SortableHeaderCell label="Height" field=SortField::Height sort=sort on_sort=on_sort min_width=80.0 />
                            <SortableHeaderCell label="Weight" field=SortField::Weight sort=sort on_sort=on_sort min_width=80.0 />
                            <SortableHeaderCell label="Salary" field=SortField::Salary sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Status" field=SortField::Availability sort=sort on_sort=on_sort />
                            <TableHeaderCell resizable=false>"Skills"</TableHeaderCell>
                            <TableHeaderCell resizable=false>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(row).collect_view()}
                    </TableBody>
                </Table>
                <Show when=move || state.with(|s| s.is_loaded) && visible.with(|v| v.is_empty())>
                    <p class="text-muted table__empty">"No records match the current search and filters."</p>
                </Show>
            </div>

            {move || editing.get().map(|target| {
                let initial = match target {
                    EditTarget::New => None,
                    EditTarget::Existing(dto) => Some(dto),
                };
                view! {
                    <MaidDetails
                        initial=initial
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            refresh();
                        })
                    />
                }
            })}
        </div>
    }
}
