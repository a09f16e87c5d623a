use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel: header with an active-filter badge and a
/// reset-all action, body with the filter controls and the active chips.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of non-default categories (badge).
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Restores every category to its default.
    on_reset_all: Callback<()>,

    /// Extra header content, e.g. the "N of M shown" counter.
    #[prop(optional, into)]
    header_extra: ViewFn,

    /// Active filter chips, shown even while collapsed.
    #[prop(optional, into)]
    filter_tags: ViewFn,

    /// Filter controls
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {header_extra.run()}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--secondary button--small"
                        prop:disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_reset_all.run(())
                    >
                        "Reset all"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>

            <div class="filter-panel__tags">{filter_tags.run()}</div>
        </div>
    }
}

/// Removable chip for one active filter.
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
