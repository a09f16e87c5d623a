//! Shared list helpers: sort indicators and the debounced search input.

use contracts::shared::maid_filter::SortField;
use contracts::shared::search::{SearchController, SearchDispatch, SEARCH_DEBOUNCE_MS};
use leptos::prelude::*;
use std::time::Duration;

/// Sort indicator for a column header.
pub fn get_sort_indicator(current: SortField, field: SortField, ascending: bool) -> &'static str {
    if current == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current: SortField, field: SortField) -> &'static str {
    if current == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Clicking the active column flips direction; another column starts ascending.
pub fn next_sort(current: (SortField, bool), clicked: SortField) -> (SortField, bool) {
    let (field, ascending) = current;
    if field == clicked {
        (field, !ascending)
    } else {
        (clicked, true)
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Search box with debounce, clear button and a "searching" indicator.
///
/// Every keystroke updates the query at once and re-arms one timer; only the
/// timer of the latest keystroke reaches `on_dispatch`. The pending timer is
/// cleared and outstanding requests are retired when the input unmounts.
#[component]
pub fn SearchInput(
    controller: RwSignal<SearchController>,
    /// Performs the request and reports back through `SearchController::resolve`.
    on_dispatch: Callback<SearchDispatch>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by name or id...".to_string()
    } else {
        placeholder
    };

    let debounce_timeout = StoredValue::new(None::<TimeoutHandle>);

    let clear_timer = move || {
        if let Some(handle) = debounce_timeout.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    };

    let handle_input_change = move |new_value: String| {
        clear_timer();
        let Some(ticket) = controller.try_update(|c| c.input(new_value, now_ms())) else {
            return;
        };

        let fire = move || {
            let _ = debounce_timeout.try_set_value(None);
            if let Some(Some(dispatch)) = controller.try_update(|c| c.fire(ticket)) {
                on_dispatch.run(dispatch);
            }
        };
        match set_timeout_with_handle(fire, Duration::from_millis(SEARCH_DEBOUNCE_MS)) {
            Ok(handle) => debounce_timeout.set_value(Some(handle)),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let clear_query = move |_| {
        clear_timer();
        if let Some(dispatch) = controller.try_update(|c| c.clear()) {
            on_dispatch.run(dispatch);
        }
    };

    on_cleanup(move || {
        clear_timer();
        let _ = controller.try_update(|c| c.cancel());
    });

    let has_text = move || controller.with(|c| !c.query().is_empty());
    let is_searching = move || controller.with(|c| c.is_searching());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if has_text() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || controller.with(|c| c.query().to_string())
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=is_searching>
                <span class="search-input__spinner" title="Searching">"…"</span>
            </Show>
            <Show when=has_text>
                <button
                    class="button button--icon search-input__clear"
                    on:click=clear_query
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(SortField::Name, SortField::Name, true), " ▲");
        assert_eq!(get_sort_indicator(SortField::Name, SortField::Name, false), " ▼");
        assert_eq!(get_sort_indicator(SortField::Name, SortField::Age, true), " ⇅");
    }

    #[test]
    fn test_next_sort() {
        assert_eq!(next_sort((SortField::Name, true), SortField::Name), (SortField::Name, false));
        assert_eq!(next_sort((SortField::Name, false), SortField::Salary), (SortField::Salary, true));
    }
}
