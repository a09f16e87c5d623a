use crate::domain::a001_maid::ui::catalogue::MaidCatalogue;
use crate::domain::a001_maid::ui::list::MaidList;
use crate::shared::notices::NoticeHost;
use crate::system::session::SessionBanner;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn TopNav() -> impl IntoView {
    view! {
        <nav class="top-nav">
            <A href="/">"Catalogue"</A>
            <A href="/admin">"Admin"</A>
        </nav>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <TopNav />
            <SessionBanner />
            <NoticeHost />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="text-muted">"Page not found."</p> }>
                    <Route path=path!("/") view=MaidCatalogue />
                    <Route path=path!("/admin") view=MaidList />
                </Routes>
            </main>
        </Router>
    }
}
