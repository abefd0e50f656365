//! Landing page: chat entry point and knowledge-base manager.

use crate::layout::nav::{AppView, NavContext};
use crate::shared::components::file_upload::FileUpload;
use crate::shared::icons::icon;
use chatcore::{ChatModel, DocumentLibrary};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found");

    // Aggregate list of completed uploads. Owned here, fed only by the
    // uploader's completion callback, discarded on navigation away.
    let library = RwSignal::new(DocumentLibrary::new());
    let on_file_uploaded = Callback::new(move |name: String| {
        library.update(|l| l.record(name));
    });

    view! {
        <div class="landing">
            <header class="landing__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Flex align=FlexAlign::Center style="gap: 12px;">
                        {icon("brain")}
                        <h1 class="landing__title">"Intelligent Document Chat"</h1>
                    </Flex>
                    <Button appearance=ButtonAppearance::Secondary disabled=true>
                        {icon("logout")}
                        " Logout"
                    </Button>
                </Flex>
            </header>

            <main class="landing__main">
                <div class="landing__intro">
                    <h2>"Welcome to Your AI Document Assistant"</h2>
                    <p>
                        "Upload your documents and start intelligent conversations. \
                         Choose how you want to interact with your knowledge base."
                    </p>
                </div>

                <div class="landing__cards">
                    <Card attr:style="flex: 1;">
                        <div class="landing__card-head">
                            {icon("chat")}
                            <h3>"Start a Conversation"</h3>
                            <p>
                                "Engage in a conversation with the AI. It will use the knowledge \
                                 from your uploaded documents to provide intelligent answers."
                            </p>
                        </div>
                        <ul class="landing__features">
                            <li>"Multiple AI models (Gemini, GPT-4, Claude)"</li>
                            <li>"Context-aware responses"</li>
                            <li>"Chat history"</li>
                        </ul>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| nav.go(AppView::Chat)
                        >
                            "Go to Chat"
                        </Button>
                    </Card>

                    <Card attr:style="flex: 1;">
                        <div class="landing__card-head">
                            {icon("upload")}
                            <h3>"Manage Knowledge Base"</h3>
                            <p>
                                "Add new documents (.pdf, .txt, .md) to create or expand the \
                                 chatbot's knowledge base."
                            </p>
                        </div>

                        <FileUpload on_file_uploaded=on_file_uploaded />

                        <Show when=move || !library.with(|l| l.is_empty())>
                            <div class="landing__recent">
                                <h4>"Recently Added:"</h4>
                                // Index-based keys: the same file name may appear twice.
                                <For
                                    each=move || {
                                        library
                                            .with(|l| l.recent().to_vec())
                                            .into_iter()
                                            .enumerate()
                                            .collect::<Vec<_>>()
                                    }
                                    key=|(index, name)| format!("{}-{}", index, name)
                                    children=|(_, name)| {
                                        view! {
                                            <div class="landing__recent-row">
                                                {icon("document")}
                                                <span>{name}</span>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </Card>
                </div>

                <div class="landing__stats">
                    <div class="landing__stat">
                        <div class="landing__stat-value">
                            {move || library.with(|l| l.len())}
                        </div>
                        <div class="landing__stat-label">"Documents Uploaded"</div>
                    </div>
                    <div class="landing__stat">
                        <div class="landing__stat-value">{ChatModel::all().len()}</div>
                        <div class="landing__stat-label">"AI Models Available"</div>
                    </div>
                    <div class="landing__stat">
                        <div class="landing__stat-value">"\u{221e}"</div>
                        <div class="landing__stat-label">"Conversations Possible"</div>
                    </div>
                </div>
            </main>
        </div>
    }
}
