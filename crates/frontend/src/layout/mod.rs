pub mod nav;
pub mod notify;

pub use nav::{AppView, NavContext};
pub use notify::{NoticeKind, NotificationHost, NotifyService};
