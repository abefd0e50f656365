use crate::layout::nav::NavContext;
use crate::layout::notify::{NotificationHost, NotifyService};
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation state to the whole app via context.
    provide_context(NavContext::new());

    // Provide NotifyService for centralized notification delivery
    provide_context(NotifyService::new());

    view! {
        <NotificationHost />
        <AppRoutes />
    }
}
