use leptos::prelude::*;
use std::collections::BTreeSet;

/// One checkbox per option; toggling reports the option value.
#[component]
pub fn CheckboxGroup(
    #[prop(into)]
    label: String,
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)]
    selected: Signal<BTreeSet<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <fieldset class="checkbox-group">
            <legend class="checkbox-group__label">{label}</legend>
            {move || {
                let options = options.get();
                if options.is_empty() {
                    view! { <span class="text-muted">"No values"</span> }.into_any()
                } else {
                    options
                        .into_iter()
                        .map(|option| {
                            let for_checked = option.clone();
                            let for_toggle = option.clone();
                            view! {
                                <label class="form__checkbox-wrapper">
                                    <input
                                        type="checkbox"
                                        class="form__checkbox"
                                        prop:checked=move || selected.with(|s| s.contains(&for_checked))
                                        on:change=move |_| on_toggle.run(for_toggle.clone())
                                    />
                                    <span class="form__checkbox-label">{option}</span>
                                </label>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </fieldset>
    }
}
