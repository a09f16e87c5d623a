//! Transient banners: failures, confirmations, copied links.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Auto-dismiss delay.
pub const NOTICE_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert--success",
            NoticeKind::Error => "alert alert--error",
            NoticeKind::Info => "alert alert--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct Notices {
    items: RwSignal<Vec<Notice>>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        // the host may already be gone when a timer fires after navigation
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = Uuid::new_v4();
        self.items.update(|items| items.push(Notice { id, kind, text }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notices() -> Notices {
    use_context::<Notices>().expect("Notices not provided")
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="notice-host">
            <For
                each=move || notices.items.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="status">
                            <span>{notice.text}</span>
                            <button
                                class="button button--icon"
                                title="Dismiss"
                                on:click=move |_| notices.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
