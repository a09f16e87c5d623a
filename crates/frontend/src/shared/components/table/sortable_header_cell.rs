use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::maid_filter::SortField;
use leptos::prelude::*;
use thaw::*;

/// Column header that sorts by `field` when clicked.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    field: SortField,
    /// Current (field, ascending)
    #[prop(into)]
    sort: Signal<(SortField, bool)>,
    on_sort: Callback<SortField>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=move || get_sort_class(sort.get().0, field)>
                    {move || {
                        let (current, ascending) = sort.get();
                        get_sort_indicator(current, field, ascending)
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
