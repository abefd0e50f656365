use leptos::prelude::*;

/// Top-level views of the demo shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Landing,
    Chat,
}

/// Which view is on screen. The demo deliberately ships no router; the only
/// navigation commands are "go to chat" and "go to landing".
#[derive(Clone, Copy)]
pub struct NavContext {
    pub view: RwSignal<AppView>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(AppView::Landing),
        }
    }

    pub fn go(&self, view: AppView) {
        self.view.set(view);
    }
}
