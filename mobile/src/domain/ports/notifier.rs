//! Driven port for the user-facing notification sink.
//!
//! The presentation layer decides how a notification is rendered (toast,
//! banner, log line); the workflow only decides that one is shown. Delivery
//! is fire-and-forget: a sink that cannot present has nothing useful to
//! report back to the workflow.

use async_trait::async_trait;

/// Category of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failure the user should act on.
    Error,
}

/// One user-facing message handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    category: NotificationCategory,
    title: String,
    detail: String,
}

impl Notification {
    /// Build a notification with an explicit category.
    pub fn new(
        category: NotificationCategory,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// Build an [`NotificationCategory::Info`] notification.
    pub fn info(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NotificationCategory::Info, title, detail)
    }

    /// Build a [`NotificationCategory::Success`] notification.
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NotificationCategory::Success, title, detail)
    }

    /// Build an [`NotificationCategory::Error`] notification.
    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NotificationCategory::Error, title, detail)
    }

    /// Category used to style the presentation.
    pub fn category(&self) -> NotificationCategory {
        self.category
    }

    /// Short headline shown to the user.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Supporting detail shown under the title.
    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }
}

/// Port for presenting notifications to the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Present one notification.
    async fn notify(&self, notification: Notification);
}

/// Notifier that silently drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _notification: Notification) {}
}
