use crate::layout::nav::{AppView, NavContext};
use crate::pages::chat::ChatPage;
use crate::pages::landing::LandingPage;
use leptos::prelude::*;
// Plain view switch instead of Router components: the demo has exactly two
// views and no deep links.

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found");

    view! {
        <Show
            when=move || nav.view.get() == AppView::Chat
            fallback=|| view! { <LandingPage /> }
        >
            <ChatPage />
        </Show>
    }
}
