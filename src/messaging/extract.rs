use std::sync::LazyLock;

use crate::logger::Logger;
use crate::messaging::constants::{
    DATA_KEY_ANDROID_SOUND, DATA_KEY_BODY, DATA_KEY_CHANNEL_ID, DATA_KEY_SOUND, DATA_KEY_TITLE,
};
use crate::messaging::types::{MessagePayload, NotificationContent};

static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("fcm-sound-channels/messaging"));

/// Applies the data-over-notification field precedence and returns the
/// content to display, or `None` when the message has no usable title/body
/// pair.
///
/// The data block wins per field because it survives delivery states where
/// the notification block does not. Keys are exact and case-sensitive;
/// values are taken as-is.
pub fn extract_content(payload: &MessagePayload) -> Option<NotificationContent> {
    let notification = payload.notification.as_ref();

    let title = payload
        .data
        .get(DATA_KEY_TITLE)
        .cloned()
        .or_else(|| notification.and_then(|n| n.title.clone()));
    let body = payload
        .data
        .get(DATA_KEY_BODY)
        .cloned()
        .or_else(|| notification.and_then(|n| n.body.clone()));
    let sound = payload
        .data
        .get(DATA_KEY_ANDROID_SOUND)
        .or_else(|| payload.data.get(DATA_KEY_SOUND))
        .cloned()
        .or_else(|| notification.and_then(|n| n.sound.clone()));
    let channel_id = payload
        .data
        .get(DATA_KEY_CHANNEL_ID)
        .cloned()
        .or_else(|| notification.and_then(|n| n.channel_id.clone()));

    let (Some(title), Some(body)) = (title, body) else {
        LOGGER.info("Missing title or body, skipping notification");
        return None;
    };

    Some(NotificationContent {
        title,
        body,
        sound,
        channel_id,
    })
}
