use std::collections::HashMap;

use serde::Deserialize;

use crate::messaging::error::{invalid_payload, MessagingResult};
use crate::messaging::types::{MessagePayload, NotificationPayload};

/// Downstream message JSON as the sending function builds it. Only the
/// fields the dispatcher consumes are modeled; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct WireMessage {
    #[serde(default)]
    notification: Option<WireNotification>,
    #[serde(default)]
    android: Option<WireAndroid>,
    #[serde(default)]
    data: HashMap<String, String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(rename = "collapseKey", default)]
    collapse_key: Option<String>,
    #[serde(rename = "messageId", default)]
    message_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireNotification {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    sound: Option<String>,
    #[serde(rename = "channelId", default)]
    channel_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireAndroid {
    #[serde(default)]
    notification: Option<WireAndroidNotification>,
}

#[derive(Debug, Default, Deserialize)]
struct WireAndroidNotification {
    #[serde(default)]
    sound: Option<String>,
    #[serde(rename = "channelId", default)]
    channel_id: Option<String>,
}

impl WireMessage {
    fn into_payload(self) -> MessagePayload {
        let base = self.notification;
        let android = self.android.and_then(|android| android.notification);

        let notification = match (base, android) {
            (None, None) => None,
            (base, android) => {
                let base = base.unwrap_or_default();
                let android = android.unwrap_or_default();
                if base.title.is_none() && base.body.is_none() {
                    log::warn!("wire notification block carries neither title nor body");
                }
                Some(NotificationPayload {
                    title: base.title,
                    body: base.body,
                    // The platform-specific block wins, matching how the
                    // transport applies it on delivery.
                    sound: android.sound.or(base.sound),
                    channel_id: android.channel_id.or(base.channel_id),
                })
            }
        };

        MessagePayload {
            notification,
            data: self.data,
            from: self.from,
            collapse_key: self.collapse_key,
            message_id: self.message_id,
        }
    }
}

impl MessagePayload {
    /// Parses the downstream-message JSON shape. Unknown fields are
    /// ignored; syntactically broken JSON is a `messaging/invalid-payload`
    /// error.
    pub fn from_json(json: &str) -> MessagingResult<Self> {
        let wire: WireMessage = serde_json::from_str(json)
            .map_err(|err| invalid_payload(format!("Malformed message JSON: {err}")))?;
        Ok(wire.into_payload())
    }
}
