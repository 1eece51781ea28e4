use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Mutex};

use chrono::Utc;

use crate::channels::{ChannelManager, Importance};
use crate::logger::Logger;
use crate::messaging::constants::{
    DEFAULT_DISPATCHER_NAME, DEFAULT_DISPLAY_SLOT, DEFAULT_SMALL_ICON,
};
use crate::messaging::error::{channel_failure, MessagingResult};
use crate::messaging::extract::extract_content;
use crate::messaging::history;
use crate::messaging::sink::NotificationSink;
use crate::messaging::types::{
    DeliveryHandler, DeliveryOutcome, DeliveryReport, MessagePayload, Notification, TapAction,
    Unsubscribe,
};

static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("fcm-sound-channels/messaging"));

static NEXT_OBSERVER_ID: AtomicU64 = AtomicU64::new(1);

/// Dispatcher configuration. `name` scopes the delivery history, so
/// same-named dispatchers share one and differently-named ones stay apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchSettings {
    pub name: String,
    pub small_icon: String,
    /// Display slot every notification posts into; with a single slot each
    /// message replaces the previous notification.
    pub display_slot: u32,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_DISPATCHER_NAME.to_string(),
            small_icon: DEFAULT_SMALL_ICON.to_string(),
            display_slot: DEFAULT_DISPLAY_SLOT,
        }
    }
}

/// Turns inbound push messages into posted notifications: extract fields,
/// resolve the sound, ensure the channel, post through the sink.
#[derive(Clone)]
pub struct MessageDispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    settings: DispatchSettings,
    channels: ChannelManager,
    sink: Arc<dyn NotificationSink>,
    observers: Mutex<Vec<ObserverEntry>>,
}

#[derive(Clone)]
struct ObserverEntry {
    id: u64,
    handler: DeliveryHandler,
}

impl fmt::Debug for MessageDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDispatcher")
            .field("settings", &self.inner.settings)
            .field("channels", &self.inner.channels)
            .finish()
    }
}

impl MessageDispatcher {
    pub fn new(
        settings: DispatchSettings,
        channels: ChannelManager,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            inner: Arc::new(DispatcherInner {
                settings,
                channels,
                sink,
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.inner.settings
    }

    pub fn channels(&self) -> &ChannelManager {
        &self.inner.channels
    }

    /// Handles one inbound message end to end.
    ///
    /// A message without a usable title/body pair is dropped and reported as
    /// [`DeliveryOutcome::Dropped`], not an error. Channel reconciliation
    /// and sink failures are errors; nothing is recorded for them.
    pub async fn handle_message(&self, payload: MessagePayload) -> MessagingResult<DeliveryReport> {
        let message_id = payload.message_id.clone();
        let Some(content) = extract_content(&payload) else {
            let report = DeliveryReport {
                outcome: DeliveryOutcome::Dropped {
                    reason: "missing title or body".to_string(),
                },
                channel_id: None,
                message_id,
                received_at: Utc::now(),
            };
            self.finish(&report);
            return Ok(report);
        };

        let sound = self.inner.channels.resolve_sound(content.sound.as_deref());
        let channel_id = self
            .inner
            .channels
            .channel_id_for(content.channel_id.as_deref(), content.sound.as_deref());
        LOGGER.debug(format!(
            "message {message_id:?}: requested sound {:?}, channel '{channel_id}'",
            content.sound
        ));

        self.inner
            .channels
            .ensure_channel_for(&channel_id, sound.clone())
            .await
            .map_err(|err| channel_failure(&err))?;

        let notification = Notification {
            channel_id: channel_id.clone(),
            title: content.title,
            body: content.body,
            small_icon: self.inner.settings.small_icon.clone(),
            auto_cancel: true,
            priority: Importance::High,
            sound,
            tap_action: TapAction::OpenLauncher { clear_stack: true },
            slot: self.inner.settings.display_slot,
        };
        self.inner.sink.post(&notification).await?;
        LOGGER.debug(format!(
            "Posted notification to channel '{channel_id}' (slot {})",
            notification.slot
        ));

        let report = DeliveryReport {
            outcome: DeliveryOutcome::Posted,
            channel_id: Some(channel_id),
            message_id,
            received_at: Utc::now(),
        };
        self.finish(&report);
        Ok(report)
    }

    /// Registers an observer for every delivery report this dispatcher
    /// produces. Calling the returned closure removes the observer.
    pub fn on_delivery(&self, handler: DeliveryHandler) -> Unsubscribe {
        let id = NEXT_OBSERVER_ID.fetch_add(1, Ordering::SeqCst);
        self.inner
            .observers
            .lock()
            .unwrap()
            .push(ObserverEntry { id, handler });

        let inner = Arc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .observers
                    .lock()
                    .unwrap()
                    .retain(|entry| entry.id != id);
            }
        })
    }

    /// Delivery reports for this dispatcher's scope, newest first.
    pub fn history(&self) -> Vec<DeliveryReport> {
        history::recent(&self.inner.settings.name)
    }

    pub fn clear_history(&self) {
        history::clear(&self.inner.settings.name);
    }

    fn finish(&self, report: &DeliveryReport) {
        history::record(&self.inner.settings.name, report);
        let observers: Vec<ObserverEntry> = self.inner.observers.lock().unwrap().clone();
        for entry in observers {
            (entry.handler)(report.clone());
        }
    }
}
