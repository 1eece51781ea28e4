/// Data-payload keys the dispatcher reads. These mirror what the sending
/// side writes into the data block, so they stay camelCase on the wire.
pub const DATA_KEY_TITLE: &str = "title";
pub const DATA_KEY_BODY: &str = "body";
pub const DATA_KEY_SOUND: &str = "sound";
/// Android-specific sound override; wins over [`DATA_KEY_SOUND`].
pub const DATA_KEY_ANDROID_SOUND: &str = "androidSound";
pub const DATA_KEY_CHANNEL_ID: &str = "channelId";

/// Small icon resource stamped on every outbound notification.
pub const DEFAULT_SMALL_ICON: &str = "ic_stat_notify";

/// Display slot notifications post into. Reusing one slot makes each message
/// replace the previous notification instead of stacking.
pub const DEFAULT_DISPLAY_SLOT: u32 = 0;

/// Dispatcher scope name when the host does not configure one.
pub const DEFAULT_DISPATCHER_NAME: &str = "default";

/// Most recent delivery reports kept per dispatcher scope.
pub const HISTORY_CAPACITY: usize = 50;
