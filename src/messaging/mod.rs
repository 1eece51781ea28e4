#![doc = include_str!("README.md")]
mod api;
mod constants;
pub mod error;
mod extract;
mod history;
mod sink;
mod types;
mod wire;

pub use api::{DispatchSettings, MessageDispatcher};
pub use extract::extract_content;
pub use sink::{InMemoryNotificationSink, NotificationSink};
pub use types::{
    DeliveryHandler, DeliveryOutcome, DeliveryReport, MessagePayload, Notification,
    NotificationContent, NotificationPayload, TapAction, Unsubscribe,
};
