use serde::Serialize;
use std::cell::RefCell;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// A toast-style message. `duration` is only a display hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

pub const SHORT: Duration = Duration::from_millis(2000);
pub const LONG: Duration = Duration::from_millis(3000);

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            duration,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message, SHORT)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message, SHORT)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message, LONG)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Receives notices after user actions. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Sends notices to the log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Error => error!(notice = %notice.message),
            _ => info!(notice = %notice.message, kind = ?notice.kind),
        }
    }
}

/// Drops every notice.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Keeps notices in memory for later inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// Notice texts shared by the stores and the browse session.
pub mod messages {
    pub fn watchlist_toggled(title: &str, added: bool) -> String {
        if added {
            format!("\"{}\" added to watchlist", title)
        } else {
            format!("\"{}\" removed from watchlist", title)
        }
    }

    pub fn my_list_toggled(title: &str, added: bool) -> String {
        if added {
            format!("Added \"{}\" to My List", title)
        } else {
            format!("Removed \"{}\" from My List", title)
        }
    }

    pub fn my_list_removed(title: &str) -> String {
        format!("\"{}\" removed from your list", title)
    }

    pub fn searching_for(query: &str) -> String {
        format!("Searching for \"{}\"", query)
    }

    pub const HISTORY_CLEARED: &str = "Search history cleared";
    pub const FILTERS_CLEARED: &str = "All filters cleared";
    pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
    pub const AVATAR_UPDATED: &str = "Avatar updated successfully!";
    pub const ACCOUNT_DELETED: &str = "Account deleted successfully";

    pub fn setting_changed(setting: &str, enabled: bool) -> String {
        format!("{} {}", setting, if enabled { "enabled" } else { "disabled" })
    }

    pub fn setting_set(setting: &str, value: &str) -> String {
        format!("{} set to {}", setting, value)
    }
}
