use std::time::Duration;

use dioxus::prelude::*;

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Handle to the transient notification surface, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifications {
    notices: Signal<Vec<Notice>>,
    next_id: Signal<u64>,
}

impl Notifications {
    /// Must be called while a component scope is active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notices: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut notices = self.notices;
        notices.write().retain(|notice| notice.id != id);
    }

    #[must_use]
    pub fn current(&self) -> Vec<Notice> {
        self.notices.read().clone()
    }

    #[must_use]
    pub fn latest(&self) -> Option<Notice> {
        self.notices.read().last().cloned()
    }

    fn push(&self, level: NoticeLevel, message: String) {
        let mut next_id = self.next_id;
        let mut notices = self.notices;
        let id = next_id();
        next_id.set(id + 1);
        notices.write().push(Notice { id, level, message });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastStack() -> Element {
    let notifications = use_context::<Notifications>();
    let notices = notifications.current();

    rsx! {
        div { class: "toast-stack", "aria-live": "polite",
            for notice in notices {
                ToastItem { key: "{notice.id}", notice: notice.clone(), notifications }
            }
        }
    }
}

#[component]
fn ToastItem(notice: Notice, notifications: Notifications) -> Element {
    let id = notice.id;
    use_future(move || async move {
        tokio::time::sleep(NOTICE_TTL).await;
        notifications.dismiss(id);
    });

    let class = match notice.level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    };
    rsx! {
        div { class, role: "status", "{notice.message}" }
    }
}
