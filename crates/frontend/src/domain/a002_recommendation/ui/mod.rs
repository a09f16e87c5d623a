use crate::domain::a002_recommendation::api;
use crate::shared::clipboard::copy_text;
use crate::shared::components::form_field::TextField;
use crate::shared::icons::icon;
use crate::shared::notices::use_notices;
use crate::system::session::use_session;
use contracts::domain::a002_recommendation::{RecommendationLink, RecommendationRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Turns the current table selection into a shareable link for one user.
#[component]
pub fn RecommendationPanel(
    /// Selected record ids, in table order.
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_clear_selection: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let notices = use_notices();

    let user_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let link = RwSignal::new(None::<RecommendationLink>);
    let sending = RwSignal::new(false);

    let create = move |_| {
        if sending.get_untracked() {
            return;
        }
        let request = RecommendationRequest::new(&user_id.get_untracked(), selected.get_untracked());
        if let Err(e) = request.validate() {
            error.set(Some(e.user_message()));
            return;
        }
        error.set(None);
        sending.set(true);
        spawn_local(async move {
            let result = api::create_link(&request).await;
            let _ = sending.try_set(false);
            match result {
                Ok(created) => {
                    session.confirm();
                    notices.success("Recommendation link created");
                    let _ = link.try_set(Some(created));
                    on_clear_selection.run(());
                }
                Err(e) => {
                    log::warn!("creating recommendation link failed: {}", e);
                    if !session.report(&e) {
                        let _ = error.try_set(Some(e.user_message()));
                    }
                }
            }
        });
    };

    let copy_link = move |_| {
        let Some(url) = link.with_untracked(|l| l.as_ref().map(|l| l.url.clone())) else {
            return;
        };
        spawn_local(async move {
            match copy_text(&url).await {
                Ok(()) => notices.info("Link copied to clipboard"),
                Err(e) => {
                    log::warn!("clipboard write failed: {}", e);
                    notices.error("Could not copy the link. Select it and copy manually.");
                }
            }
        });
    };

    view! {
        <section class="recommendation-panel">
            <div class="recommendation-panel__form">
                {icon("link")}
                <span class="recommendation-panel__count">
                    {move || format!("{} selected", selected.with(|s| s.len()))}
                </span>
                <TextField
                    label="User id"
                    value=Signal::derive(move || user_id.get())
                    on_input=Callback::new(move |v: String| user_id.set(v))
                    placeholder="Recipient user id"
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=create
                    disabled=Signal::derive(move || sending.get() || selected.with(|s| s.is_empty()))
                >
                    "Create link"
                </Button>
            </div>
            {move || error.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}
            {move || link.get().map(|l| view! {
                <div class="recommendation-panel__link">
                    <a href=l.url.clone() target="_blank" rel="noopener">{l.url.clone()}</a>
                    {l.expires_at.map(|at| view! {
                        <span class="text-muted">{format!(" (expires {})", at)}</span>
                    })}
                    <button class="button button--icon" title="Copy link" on:click=copy_link>
                        {icon("copy")}
                    </button>
                </div>
            })}
        </section>
    }
}
