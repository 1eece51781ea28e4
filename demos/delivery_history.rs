//! Delivery observers and the bounded history: watch reports arrive, then
//! read them back newest first.

use std::sync::Arc;

use fcm_sound_channels::channels::{
    ChannelManager, ChannelSettings, InMemoryChannelRegistry, StaticSoundCatalog,
};
use fcm_sound_channels::messaging::{
    DispatchSettings, InMemoryNotificationSink, MessageDispatcher, MessagePayload,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let channels = ChannelManager::new(
        ChannelSettings::default(),
        Arc::new(InMemoryChannelRegistry::new()),
        Arc::new(StaticSoundCatalog::well_known("com.example.app")),
    )?;
    let dispatcher = MessageDispatcher::new(
        DispatchSettings::default(),
        channels,
        Arc::new(InMemoryNotificationSink::new()),
    );

    let unsubscribe = dispatcher.on_delivery(Arc::new(|report| {
        println!(
            "observer: {:?} (message {:?})",
            report.outcome, report.message_id
        );
    }));

    let messages = [
        r#"{"data": {"title": "One", "body": "first", "sound": "ding"}, "messageId": "h-1"}"#,
        r#"{"data": {"title": "Two", "body": "second"}, "messageId": "h-2"}"#,
        r#"{"data": {"body": "no title, gets dropped"}, "messageId": "h-3"}"#,
    ];
    for json in messages {
        dispatcher.handle_message(MessagePayload::from_json(json)?).await?;
    }
    unsubscribe();

    println!("history (newest first):");
    for report in dispatcher.history() {
        println!(
            "  {} {:?} channel={:?} message={:?}",
            report.received_at.format("%H:%M:%S%.3f"),
            report.outcome,
            report.channel_id,
            report.message_id
        );
    }

    dispatcher.clear_history();
    Ok(())
}
