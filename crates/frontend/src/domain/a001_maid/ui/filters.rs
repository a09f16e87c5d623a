//! Filter panel shared by the admin dashboard and the public catalogue.
//!
//! The panel never mutates the filter state in place: each control derives
//! the next `FilterState` and hands it to `on_change`.

use crate::shared::components::checkbox_group::CheckboxGroup;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::range_slider::RangeSliderInput;
use contracts::domain::a001_maid::MaidRecord;
use contracts::shared::maid_filter::{
    distinct_values, Endpoint, FilterState, RangeCategory, SetCategory,
};
use leptos::prelude::*;

#[component]
pub fn MaidFilterPanel(
    /// Collection the option lists are discovered from.
    #[prop(into)]
    records: Signal<Vec<MaidRecord>>,
    #[prop(into)]
    filters: Signal<FilterState>,
    on_change: Callback<FilterState>,
    /// Number of records passing the filters.
    #[prop(into)]
    shown: Signal<usize>,
    /// Set categories to hide, e.g. availability on the public page.
    #[prop(optional)]
    hidden: Vec<SetCategory>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let active_count = Signal::derive(move || filters.with(|f| f.count_active()));

    let set_groups = SetCategory::ALL
        .into_iter()
        .filter(|c| !hidden.contains(c))
        .map(|category| {
            let options = Signal::derive(move || records.with(|r| distinct_values(r, category)));
            let selected = Signal::derive(move || filters.with(|f| f.selected(category).clone()));
            let on_toggle = Callback::new(move |value: String| {
                let next = filters.with_untracked(|f| f.toggle_set_member(category, &value));
                on_change.run(next);
            });
            view! {
                <CheckboxGroup
                    label=category.label()
                    options=options
                    selected=selected
                    on_toggle=on_toggle
                />
            }
        })
        .collect_view();

    let range_sliders = RangeCategory::ALL
        .into_iter()
        .map(|category| {
            let range = Signal::derive(move || filters.with(|f| f.range(category)));
            let on_commit = Callback::new(move |(endpoint, value): (Endpoint, f64)| {
                let next = filters.with_untracked(|f| f.with_range_endpoint(category, endpoint, value));
                on_change.run(next);
            });
            view! { <RangeSliderInput category=category range=range on_commit=on_commit /> }
        })
        .collect_view();

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_count
            on_reset_all=Callback::new(move |_| {
                log::debug!("filters reset");
                on_change.run(filters.with_untracked(|f| f.reset_all()));
            })
            header_extra=move || view! {
                <span class="text-muted">
                    {move || format!("{} of {} shown", shown.get(), records.with(|r| r.len()))}
                </span>
            }
            filter_tags=move || view! {
                <For
                    each=move || filters.with(|f| f.active_filters())
                    key=|chip| chip.label.clone()
                    children=move |chip| {
                        let category = chip.category;
                        view! {
                            <FilterTag
                                label=chip.label
                                on_remove=Callback::new(move |_| {
                                    on_change.run(filters.with_untracked(|f| f.clear_category(category)));
                                })
                            />
                        }
                    }
                />
            }
        >
            <div class="filter-panel__sets">{set_groups}</div>
            <div class="filter-panel__ranges">{range_sliders}</div>
        </FilterPanel>
    }
}
