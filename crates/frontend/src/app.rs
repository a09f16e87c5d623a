use crate::routes::routes::AppRoutes;
use crate::shared::notices::Notices;
use crate::system::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session flag shared by every REST caller ("sign in again" banner).
    provide_context(SessionContext::new());

    // Transient banners for failures and confirmations.
    provide_context(Notices::new());

    view! {
        <AppRoutes />
    }
}
