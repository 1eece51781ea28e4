use std::sync::{Arc, Mutex};

use fcm_sound_channels::channels::{
    ChannelManager, ChannelRegistry, ChannelSettings, InMemoryChannelRegistry, SoundUri,
    StaticSoundCatalog,
};
use fcm_sound_channels::messaging::{
    DeliveryOutcome, DeliveryReport, DispatchSettings, InMemoryNotificationSink,
    MessageDispatcher, MessagePayload,
};

const PACKAGE: &str = "gr.example.app";

struct TestHost {
    dispatcher: MessageDispatcher,
    manager: ChannelManager,
    registry: Arc<InMemoryChannelRegistry>,
    sink: Arc<InMemoryNotificationSink>,
}

fn host(scope: &str) -> TestHost {
    let registry = Arc::new(InMemoryChannelRegistry::new());
    let sink = Arc::new(InMemoryNotificationSink::new());
    let manager = ChannelManager::new(
        ChannelSettings::default(),
        Arc::clone(&registry) as Arc<dyn ChannelRegistry>,
        Arc::new(StaticSoundCatalog::well_known(PACKAGE)),
    )
    .expect("default settings are valid");
    let dispatcher = MessageDispatcher::new(
        DispatchSettings {
            name: scope.to_string(),
            ..Default::default()
        },
        manager.clone(),
        Arc::clone(&sink) as Arc<dyn fcm_sound_channels::messaging::NotificationSink>,
    );
    dispatcher.clear_history();
    TestHost {
        dispatcher,
        manager,
        registry,
        sink,
    }
}

fn sound_uri(name: &str) -> SoundUri {
    SoundUri::bundled_raw(PACKAGE, name).expect("valid sound uri")
}

#[tokio::test(flavor = "current_thread")]
async fn preregistered_channel_is_reused_by_the_message_path() {
    let host = host("flow-preregister");

    let report = host.manager.ensure_preregistered().await;
    assert!(report.is_complete());
    assert_eq!(host.registry.create_calls(), 5);

    // The startup path and the receive path agree on channel identity and
    // sound, so the message cannot force a recreation.
    let payload = MessagePayload::from_json(
        r#"{
            "notification": {"title": "Order shipped", "body": "On its way"},
            "android": {"notification": {"sound": "ding"}},
            "data": {"sound": "ding", "androidSound": "ding"},
            "messageId": "m-1"
        }"#,
    )
    .unwrap();
    let delivery = host.dispatcher.handle_message(payload).await.unwrap();

    assert!(delivery.was_posted());
    assert_eq!(delivery.channel_id.as_deref(), Some("custom_sound_channel_ding"));
    assert_eq!(host.registry.create_calls(), 5);
    assert_eq!(host.registry.delete_calls(), 0);

    let posted = host.sink.last_posted().expect("notification posted");
    assert_eq!(posted.channel_id, "custom_sound_channel_ding");
    assert_eq!(posted.sound, Some(sound_uri("ding")));

    host.dispatcher.clear_history();
}

#[tokio::test(flavor = "current_thread")]
async fn changing_the_sound_on_a_channel_recreates_it() {
    let host = host("flow-recreate");

    let first = MessagePayload::from_json(
        r#"{"data": {"title": "t", "body": "b", "sound": "ding",
                      "channelId": "alerts"}}"#,
    )
    .unwrap();
    let second = MessagePayload::from_json(
        r#"{"data": {"title": "t", "body": "b", "sound": "shockding",
                      "channelId": "alerts"}}"#,
    )
    .unwrap();

    host.dispatcher.handle_message(first).await.unwrap();
    assert_eq!(
        host.registry.get_channel("alerts").await.unwrap().unwrap().sound,
        Some(sound_uri("ding"))
    );

    host.dispatcher.handle_message(second).await.unwrap();
    assert_eq!(host.registry.delete_calls(), 1);
    assert_eq!(
        host.registry.get_channel("alerts").await.unwrap().unwrap().sound,
        Some(sound_uri("shockding"))
    );

    // Both messages were shown despite the channel churn.
    assert_eq!(host.sink.posted().len(), 2);
    host.dispatcher.clear_history();
}

#[tokio::test(flavor = "current_thread")]
async fn recreation_waits_for_a_slow_registry_deletion() {
    let registry = Arc::new(InMemoryChannelRegistry::with_deletion_lag(2));
    let sink = Arc::new(InMemoryNotificationSink::new());
    let manager = ChannelManager::new(
        ChannelSettings::default(),
        Arc::clone(&registry) as Arc<dyn ChannelRegistry>,
        Arc::new(StaticSoundCatalog::well_known(PACKAGE)),
    )
    .unwrap();
    let dispatcher = MessageDispatcher::new(
        DispatchSettings {
            name: "flow-slow-delete".to_string(),
            ..Default::default()
        },
        manager,
        Arc::clone(&sink) as Arc<dyn fcm_sound_channels::messaging::NotificationSink>,
    );
    dispatcher.clear_history();

    let ding = MessagePayload::from_json(
        r#"{"data": {"title": "t", "body": "b", "sound": "ding"}}"#,
    )
    .unwrap();
    let shock = MessagePayload::from_json(
        r#"{"data": {"title": "t", "body": "b", "sound": "shockding",
                      "channelId": "custom_sound_channel_ding"}}"#,
    )
    .unwrap();

    dispatcher.handle_message(ding).await.unwrap();
    dispatcher.handle_message(shock).await.unwrap();

    // The recreate landed only after the registry stopped reporting the
    // deleted channel, so the new sound stuck.
    let record = registry
        .get_channel("custom_sound_channel_ding")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.sound, Some(sound_uri("shockding")));
    dispatcher.clear_history();
}

#[tokio::test(flavor = "current_thread")]
async fn unusable_message_is_dropped_and_recorded() {
    let host = host("flow-dropped");

    let payload = MessagePayload::from_json(r#"{"data": {"body": "no title"}}"#).unwrap();
    let delivery = host.dispatcher.handle_message(payload).await.unwrap();

    assert!(matches!(delivery.outcome, DeliveryOutcome::Dropped { .. }));
    assert!(host.sink.posted().is_empty());

    let history = host.dispatcher.history();
    assert_eq!(history.len(), 1);
    assert!(!history[0].was_posted());
    host.dispatcher.clear_history();
}

#[tokio::test(flavor = "current_thread")]
async fn observers_see_every_delivery_in_order() {
    let host = host("flow-observers");
    let seen: Arc<Mutex<Vec<DeliveryReport>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&seen);

    let unsubscribe = host.dispatcher.on_delivery(Arc::new(move |report| {
        captured.lock().unwrap().push(report);
    }));

    let posted = MessagePayload::from_json(
        r#"{"data": {"title": "t", "body": "b", "sound": "custom_sound"}}"#,
    )
    .unwrap();
    let dropped = MessagePayload::from_json(r#"{"data": {"title": "only"}}"#).unwrap();

    host.dispatcher.handle_message(posted).await.unwrap();
    host.dispatcher.handle_message(dropped).await.unwrap();
    unsubscribe();

    {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].was_posted());
        assert!(!seen[1].was_posted());
        assert_eq!(
            seen[0].channel_id.as_deref(),
            Some("custom_sound_channel_custom_sound")
        );
    }

    // History matches what the observers saw, newest first.
    let history = host.dispatcher.history();
    assert_eq!(history.len(), 2);
    assert!(!history[0].was_posted());
    assert!(history[1].was_posted());
    host.dispatcher.clear_history();
}
