//! Public read-only catalogue: available records as cards.

use super::filters::MaidFilterPanel;
use crate::domain::a001_maid::api;
use crate::shared::date_utils::use_today;
use crate::shared::format::{format_list, format_measure, format_opt_amount, EMPTY_CELL};
use crate::shared::list_utils::SearchInput;
use crate::shared::notices::use_notices;
use crate::system::session::use_session;
use chrono::NaiveDate;
use contracts::domain::a001_maid::{normalize_all, Availability, MaidRecord};
use contracts::shared::maid_filter::{evaluate_on, sort_records_on, FilterState, SetCategory, SortField};
use contracts::shared::search::{SearchController, SearchDispatch, SearchResolution};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Records offered publicly: available ones passing the filters, by name.
pub fn catalogue_records(records: &[MaidRecord], filters: &FilterState, today: NaiveDate) -> Vec<MaidRecord> {
    let available: Vec<MaidRecord> = records
        .iter()
        .filter(|r| r.availability() == Availability::Available)
        .cloned()
        .collect();
    let mut shown = evaluate_on(&available, filters, today);
    sort_records_on(&mut shown, SortField::Name, true, today);
    shown
}

#[component]
fn MaidCard(record: MaidRecord, #[prop(into)] today: Signal<NaiveDate>) -> impl IntoView {
    let dob_record = record.clone();
    let age = move || {
        dob_record
            .age_on(today.get())
            .map(|a| format!("{} yrs", a))
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    };
    let initial = record.name.chars().next().unwrap_or('?').to_string();

    view! {
        <article class="maid-card">
            <div class="maid-card__photo">
                {match record.photo_url.clone() {
                    Some(url) => view! { <img src=url alt=record.name.clone() loading="lazy" /> }.into_any(),
                    None => view! { <span class="maid-card__initial">{initial}</span> }.into_any(),
                }}
            </div>
            <div class="maid-card__body">
                <h3 class="maid-card__name">{record.name.clone()}</h3>
                <p class="maid-card__summary">{record.summary.clone()}</p>
                <dl class="maid-card__facts">
                    <dt>"Age"</dt><dd>{age}</dd>
                    <dt>"Height"</dt><dd>{format_measure(record.height, "cm")}</dd>
                    <dt>"Salary"</dt><dd>{format_opt_amount(record.salary)}</dd>
                    <dt>"Skills"</dt><dd>{format_list(&record.skills)}</dd>
                    <dt>"Languages"</dt><dd>{format_list(&record.languages)}</dd>
                </dl>
            </div>
        </article>
    }
}

#[component]
pub fn MaidCatalogue() -> impl IntoView {
    let records = RwSignal::new(Vec::<MaidRecord>::new());
    let filters = RwSignal::new(FilterState::default());
    let search = RwSignal::new(SearchController::new());
    let session = use_session();
    let notices = use_notices();

    let run_dispatch = Callback::new(move |dispatch: SearchDispatch| {
        spawn_local(async move {
            let result = api::run_search(&dispatch.request).await;
            match search.try_update(|c| c.resolve(dispatch.request_id, result)) {
                Some(SearchResolution::Apply(dtos)) => {
                    let _ = records.try_set(normalize_all(&dtos));
                }
                Some(SearchResolution::Failed(err)) => {
                    log::warn!("catalogue request #{} failed: {}", dispatch.request_id, err);
                    if !session.report(&err) {
                        notices.error(err.user_message());
                    }
                }
                Some(SearchResolution::Stale) | None => {}
            }
        });
    });

    Effect::new(move |_| {
        if let Some(dispatch) = search.try_update(|c| c.refresh()) {
            run_dispatch.run(dispatch);
        }
    });

    let today = use_today();
    let shown = Memo::new(move |_| {
        let today = today.get();
        records.with(|r| filters.with(|f| catalogue_records(r, f, today)))
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Available helpers"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput controller=search on_dispatch=run_dispatch placeholder="Search by name..." />
                </div>
            </div>

            <MaidFilterPanel
                records=Signal::derive(move || records.get())
                filters=Signal::derive(move || filters.get())
                on_change=Callback::new(move |next: FilterState| filters.set(next))
                shown=Signal::derive(move || shown.with(|s| s.len()))
                hidden=vec![SetCategory::Availability]
            />

            <div class="maid-grid">
                <For
                    each=move || shown.get()
                    key=|record| record.id.clone()
                    children=move |record| view! { <MaidCard record=record today=today /> }
                />
            </div>
            <Show when=move || shown.with(|s| s.is_empty()) && !search.with(|c| c.is_searching())>
                <p class="text-muted">"No helpers match your filters right now."</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_maid::{normalize, MaidDto};

    fn record(id: &str, name: &str, active: bool, employed: bool) -> MaidRecord {
        normalize(&MaidDto {
            id: Some(id.into()),
            name: Some(name.into()),
            is_active: active,
            is_employed: employed,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_catalogue_shows_available_only_sorted_by_name() {
        let records = vec![
            record("1", "Zoe", true, false),
            record("2", "Ana", true, true),
            record("3", "Mia", false, false),
            record("4", "Bea", true, false),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let shown = catalogue_records(&records, &FilterState::default(), today);
        let ids: Vec<&str> = shown.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "1"]);
    }
}
