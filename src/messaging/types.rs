use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::channels::{Importance, SoundUri};

/// Notification block of an inbound message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub sound: Option<String>,
    pub channel_id: Option<String>,
}

/// An inbound push message as delivered to the device.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagePayload {
    pub notification: Option<NotificationPayload>,
    pub data: HashMap<String, String>,
    pub from: Option<String>,
    pub collapse_key: Option<String>,
    pub message_id: Option<String>,
}

/// Fields extracted from a message once data/notification precedence has
/// been applied. `title` and `body` are mandatory by the time this exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: Option<String>,
    pub channel_id: Option<String>,
}

/// What tapping the posted notification does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapAction {
    /// Reopen the application's main entry point; `clear_stack` discards any
    /// activity stack above it.
    OpenLauncher { clear_stack: bool },
}

/// The fully-resolved notification handed to the platform sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub channel_id: String,
    pub title: String,
    pub body: String,
    pub small_icon: String,
    pub auto_cancel: bool,
    pub priority: Importance,
    /// Per-notification sound override. The channel still decides what
    /// actually plays on channel-aware platforms.
    pub sound: Option<SoundUri>,
    pub tap_action: TapAction,
    pub slot: u32,
}

/// How a handled message ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Posted,
    Dropped { reason: String },
}

/// Record of one handled message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryReport {
    pub outcome: DeliveryOutcome,
    pub channel_id: Option<String>,
    pub message_id: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl DeliveryReport {
    pub fn was_posted(&self) -> bool {
        self.outcome == DeliveryOutcome::Posted
    }
}

pub type DeliveryHandler = Arc<dyn Fn(DeliveryReport) + Send + Sync + 'static>;

pub type Unsubscribe = Box<dyn FnOnce() + Send + 'static>;
