use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent};
use uuid::Uuid;

/// How long a notice stays on screen before dismissing itself, in ms.
const NOTICE_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

/// Service for centralized, fire-and-forget notification delivery
///
/// Usage:
/// ```rust,no_run
/// # use leptos::prelude::use_context;
/// # use frontend::layout::notify::{NoticeKind, NotifyService};
/// let notify = use_context::<NotifyService>().unwrap();
/// notify.notify(NoticeKind::Info, "Done", "All files processed");
/// ```
#[derive(Clone, Copy)]
pub struct NotifyService {
    notices: RwSignal<Vec<Notice>>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(vec![]),
        }
    }

    /// Pushes a notice and schedules its own dismissal. Callers get no
    /// acknowledgement back.
    pub fn notify(&self, kind: NoticeKind, title: &str, body: &str) {
        let notice = Notice {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.to_string(),
            body: body.to_string(),
        };
        let id = notice.id.clone();
        self.notices.update(|list| list.push(notice));

        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            notices.update(|list| list.retain(|n| n.id != id));
        });
    }

    pub fn dismiss(&self, id: &str) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

/// Renders the notice stack in the top-right corner. Mounted once from `App`.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not provided in context");

    view! {
        <div
            class="notify-stack"
            style="position: fixed; top: var(--spacing-md, 16px); right: var(--spacing-md, 16px); z-index: 1000; display: flex; flex-direction: column; gap: 8px; max-width: 380px;"
        >
            <For
                each=move || notify.notices.get()
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let intent = match notice.kind {
                        NoticeKind::Info => MessageBarIntent::Success,
                        NoticeKind::Warning => MessageBarIntent::Warning,
                    };
                    let id = notice.id.clone();
                    view! {
                        <MessageBar intent=intent>
                            <div style="display: flex; align-items: flex-start; gap: 8px;">
                                <div style="flex: 1;">
                                    <div style="font-weight: 600;">{notice.title.clone()}</div>
                                    <div style="font-size: 0.85em;">{notice.body.clone()}</div>
                                </div>
                                <button
                                    class="notify-stack__close"
                                    style="background: none; border: none; cursor: pointer; padding: 0;"
                                    on:click=move |_| notify.dismiss(&id)
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
