//! Row selection checkboxes for the records table.
//!
//! ```ignore
//! <HeaderSelectionCheckbox
//!     visible_ids=visible_ids
//!     selected=selected
//!     on_change=Callback::new(move |check_all: bool| select_visible(check_all))
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn header_state(visible_ids: &[String], selected: &HashSet<String>) -> CheckboxState {
    if visible_ids.is_empty() {
        return CheckboxState::Unchecked;
    }
    let selected_count = visible_ids.iter().filter(|id| selected.contains(*id)).count();
    if selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == visible_ids.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Header checkbox over the visible rows: checked, unchecked or indeterminate.
#[component]
pub fn HeaderSelectionCheckbox(
    #[prop(into)]
    visible_ids: Signal<Vec<String>>,
    #[prop(into)]
    selected: Signal<HashSet<String>>,
    /// true = select every visible row, false = clear them
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || selected.with(|sel| visible_ids.with(|ids| header_state(ids, sel))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == CheckboxState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checkbox_state.get() == CheckboxState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

/// Per-row checkbox; clicks do not reach the row.
#[component]
pub fn RowSelectionCheckbox(
    #[prop(into)]
    item_id: String,
    #[prop(into)]
    selected: Signal<HashSet<String>>,
    /// (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&id_for_checked))
                on:change=move |ev| {
                    on_change.run((item_id.clone(), event_target_checked(&ev)));
                }
            />
        </TableCell>
    }
}
