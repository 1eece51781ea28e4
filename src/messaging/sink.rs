use std::sync::Mutex;

use crate::messaging::error::MessagingResult;
use crate::messaging::types::Notification;

/// Platform surface that displays notifications. On device this wraps the
/// system notification manager; tests and host-side tooling use
/// [`InMemoryNotificationSink`].
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    async fn post(&self, notification: &Notification) -> MessagingResult<()>;
}

/// Sink that records every posted notification.
#[derive(Debug, Default)]
pub struct InMemoryNotificationSink {
    inner: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posted(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().clone()
    }

    pub fn last_posted(&self) -> Option<Notification> {
        self.inner.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn post(&self, notification: &Notification) -> MessagingResult<()> {
        self.inner.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::Importance;
    use crate::messaging::types::TapAction;

    fn notification(slot: u32) -> Notification {
        Notification {
            channel_id: "default".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
            small_icon: "ic_stat_notify".to_string(),
            auto_cancel: true,
            priority: Importance::High,
            sound: None,
            tap_action: TapAction::OpenLauncher { clear_stack: true },
            slot,
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn records_posts_in_order() {
        let sink = InMemoryNotificationSink::new();
        sink.post(&notification(0)).await.unwrap();
        sink.post(&notification(1)).await.unwrap();

        let posted = sink.posted();
        assert_eq!(posted.len(), 2);
        assert_eq!(posted[0].slot, 0);
        assert_eq!(sink.last_posted().unwrap().slot, 1);
    }
}
