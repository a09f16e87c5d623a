//! Session signal shared by every REST caller.
//!
//! Authentication itself lives in the backend (cookie session). The frontend
//! only needs to know when a request came back 401/403 so it can tell
//! "no data" apart from "not permitted" and offer a way to sign in again.

use crate::shared::api_utils::login_url;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub unauthorized: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            unauthorized: RwSignal::new(false),
        }
    }

    /// Raise the flag for authorization failures. Returns whether `err` was
    /// one, so callers can skip their generic error banner.
    pub fn report(&self, err: &ApiError) -> bool {
        if err.is_unauthorized() {
            log::warn!("request rejected as unauthorized: {}", err);
            self.unauthorized.set(true);
            true
        } else {
            false
        }
    }

    /// Any successful authenticated call proves the session is alive again.
    pub fn confirm(&self) {
        if self.unauthorized.get_untracked() {
            self.unauthorized.set(false);
        }
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided")
}

#[component]
pub fn SessionBanner() -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.unauthorized.get()>
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">
                    "You are not signed in or your session has expired. "
                    <a href=login_url()>"Sign in again"</a>
                </span>
            </div>
        </Show>
    }
}
