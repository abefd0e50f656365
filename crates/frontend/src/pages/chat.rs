//! Chat page: session sidebar, message pane and the simulated reply flow.

use crate::layout::nav::{AppView, NavContext};
// Explicit imports shadow the thaw glob for the two form controls we style
// ourselves.
use crate::shared::components::ui::{Input, Select};
use crate::shared::format::format_clock_time;
use crate::shared::icons::icon;
use chatcore::{ChatModel, ChatStore, MessageRole, REPLY_LATENCY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Copy)]
struct ChatPageVm {
    store: RwSignal<ChatStore>,
    draft: RwSignal<String>,
    model: RwSignal<ChatModel>,
}

impl ChatPageVm {
    fn new() -> Self {
        Self {
            store: RwSignal::new(ChatStore::demo()),
            draft: RwSignal::new(String::new()),
            model: RwSignal::new(ChatModel::default()),
        }
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found");
    let vm = ChatPageVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Blank input, a pending reply or a missing active session make
    // begin_send return None; nothing else to do then.
    let handle_send = Callback::new(move |_: ()| {
        let text = vm.draft.get_untracked();
        let model = vm.model.get_untracked();
        let Some(reply) = vm
            .store
            .try_update(|s| s.begin_send(&text, model))
            .flatten()
        else {
            return;
        };

        vm.draft.set(String::new());
        scroll_to_bottom();
        leptos::logging::log!("chat: reply scheduled for session {}", reply.session_id);

        spawn_local(async move {
            TimeoutFuture::new(REPLY_LATENCY_MS).await;
            vm.store.update(|s| s.apply_reply(reply));
            scroll_to_bottom();
        });
    });

    let is_pending = move || vm.store.with(|s| s.is_pending());

    view! {
        <div class="chat">
            // Sidebar
            <aside class="chat__sidebar">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| nav.go(AppView::Landing)
                >
                    {icon("back")}
                    " Back to Home"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        vm.store.update(|s| {
                            s.create_session();
                        });
                    }
                >
                    {icon("plus")}
                    " New Chat"
                </Button>

                <h3 class="chat__history-title">"Chat History"</h3>
                <div class="chat__sessions">
                    // Key carries the message count so a row refreshes when
                    // its session gains messages.
                    <For
                        each=move || vm.store.with(|s| s.sessions().to_vec())
                        key=|session| format!("{}-{}", session.id, session.messages.len())
                        children=move |session| {
                            let select_id = session.id.clone();
                            let highlight_id = session.id.clone();
                            let is_active = move || {
                                vm.store
                                    .with(|s| s.active_id() == Some(highlight_id.as_str()))
                            };
                            view! {
                                <div
                                    class="chat__session"
                                    class=("chat__session--active", is_active)
                                    on:click=move |_| {
                                        vm.store.update(|s| s.select_session(&select_id));
                                    }
                                >
                                    <div class="chat__session-title">{session.title.clone()}</div>
                                    <div class="chat__session-time">
                                        {format_clock_time(&session.last_updated_at)}
                                    </div>
                                    <div class="chat__session-count">
                                        {format!("{} messages", session.messages.len())}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </aside>

            // Main area
            <div class="chat__main">
                <header class="chat__header">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <Flex align=FlexAlign::Center style="gap: 12px;">
                            {icon("brain")}
                            <h1 class="chat__title">"Document Chat"</h1>
                        </Flex>
                        <Flex align=FlexAlign::Center style="gap: 8px;">
                            <span class="chat__model-label">"AI Model:"</span>
                            <Select
                                value=Signal::derive(move || vm.model.get().id().to_string())
                                on_change=Callback::new(move |id: String| {
                                    if let Some(model) = ChatModel::from_id(&id) {
                                        vm.model.set(model);
                                    }
                                })
                                options=Signal::derive(|| {
                                    ChatModel::all()
                                        .iter()
                                        .map(|m| {
                                            (m.id().to_string(), m.display_name().to_string())
                                        })
                                        .collect::<Vec<_>>()
                                })
                            />
                        </Flex>
                    </Flex>
                </header>

                // Messages
                <div node_ref=messages_container_ref class="chat__messages">
                    <For
                        each=move || {
                            vm.store.with(|s| {
                                s.active_session()
                                    .map(|session| session.messages.clone())
                                    .unwrap_or_default()
                            })
                        }
                        key=|msg| msg.id.clone()
                        let:msg
                    >
                        {{
                            let is_user = msg.role == MessageRole::User;
                            view! {
                                <div class=if is_user {
                                    "chat__bubble chat__bubble--user"
                                } else {
                                    "chat__bubble chat__bubble--assistant"
                                }>
                                    {(!is_user).then(|| icon("brain"))}
                                    <div class="chat__bubble-body">
                                        <div class="chat__bubble-text">{msg.content.clone()}</div>
                                        <div class="chat__bubble-time">
                                            {format_clock_time(&msg.created_at)}
                                        </div>
                                    </div>
                                    {is_user.then(|| icon("user"))}
                                </div>
                            }
                        }}
                    </For>

                    <Show when=is_pending>
                        <div class="chat__bubble chat__bubble--assistant">
                            {icon("brain")}
                            <div class="chat__typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                    </Show>
                </div>

                // Input
                <div class="chat__input-row">
                    <Input
                        value=vm.draft
                        on_input=Callback::new(move |text: String| vm.draft.set(text))
                        on_enter=handle_send
                        placeholder="Ask about your documents..."
                        disabled=Signal::derive(is_pending)
                        class="chat__input"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            is_pending() || vm.draft.get().trim().is_empty()
                        })
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                    </Button>
                </div>
            </div>
        </div>
    }
}
