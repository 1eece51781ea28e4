//! Receive-path walkthrough: parse downstream message JSON, run it through
//! the dispatcher, and show the notification that would be posted.

use std::sync::Arc;

use fcm_sound_channels::channels::{
    ChannelManager, ChannelSettings, InMemoryChannelRegistry, StaticSoundCatalog,
};
use fcm_sound_channels::messaging::{
    DispatchSettings, InMemoryNotificationSink, MessageDispatcher, MessagePayload,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fcm_sound_channels::logger::set_log_level("debug")?;

    let channels = ChannelManager::new(
        ChannelSettings::default(),
        Arc::new(InMemoryChannelRegistry::new()),
        Arc::new(StaticSoundCatalog::well_known("com.example.app")),
    )?;
    channels.ensure_preregistered().await;

    let sink = Arc::new(InMemoryNotificationSink::new());
    let dispatcher = MessageDispatcher::new(
        DispatchSettings::default(),
        channels,
        Arc::clone(&sink) as Arc<dyn fcm_sound_channels::messaging::NotificationSink>,
    );

    // The shape the companion sending function produces for a custom sound.
    let custom_sound = r#"{
        "notification": {"title": "Order shipped", "body": "Your order is on its way"},
        "android": {
            "priority": "high",
            "notification": {"sound": "ding", "channelId": "custom_sound_channel_ding"}
        },
        "data": {"sound": "ding", "androidSound": "ding"},
        "messageId": "demo-1"
    }"#;

    // A data-only message with a sound the app does not bundle.
    let unknown_sound = r#"{
        "data": {"title": "Heads up", "body": "Falls back to the default sound",
                  "sound": "airhorn"},
        "messageId": "demo-2"
    }"#;

    for json in [custom_sound, unknown_sound] {
        let payload = MessagePayload::from_json(json)?;
        let report = dispatcher.handle_message(payload).await?;
        println!(
            "message {:?}: {:?} on channel {:?}",
            report.message_id, report.outcome, report.channel_id
        );
    }

    for notification in sink.posted() {
        println!(
            "posted: '{}' / '{}' channel={} sound={}",
            notification.title,
            notification.body,
            notification.channel_id,
            notification
                .sound
                .as_ref()
                .map(|uri| uri.as_str())
                .unwrap_or("(channel default)")
        );
    }

    Ok(())
}
