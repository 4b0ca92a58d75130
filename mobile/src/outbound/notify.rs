//! Tracing-backed notification sink for headless runs.
//!
//! The mobile shell presents notifications as flash messages; the CLI and
//! integration tests have no screen, so notifications become structured log
//! events instead.

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{Notification, NotificationCategory, Notifier};

/// Notifier that emits each notification as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.category() {
            NotificationCategory::Info | NotificationCategory::Success => {
                info!(
                    title = notification.title(),
                    detail = notification.detail(),
                    "notification"
                );
            }
            NotificationCategory::Error => {
                error!(
                    title = notification.title(),
                    detail = notification.detail(),
                    "notification"
                );
            }
        }
    }
}
