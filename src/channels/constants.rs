/// Channel id prefix for per-sound channels. The bare prefix doubles as the
/// fallback channel id referenced by the host manifest.
pub const CUSTOM_CHANNEL_PREFIX: &str = "custom_sound_channel";
pub const CUSTOM_CHANNEL_NAME: &str = "Custom Sound Notifications";
pub const CUSTOM_CHANNEL_DESCRIPTION: &str = "Notifications with custom sound";

pub const DEFAULT_CHANNEL_ID: &str = "default";
pub const DEFAULT_CHANNEL_NAME: &str = "Default Notifications";
pub const DEFAULT_CHANNEL_DESCRIPTION: &str = "Notifications with default system sound";

/// Naming for channels requested by explicit message ids the policy does not
/// recognize.
pub const MESSAGE_CHANNEL_NAME: &str = "Notification Channel";
pub const MESSAGE_CHANNEL_DESCRIPTION: &str = "Notification channel";

/// Sound files (bare names, bundled under the raw resource folder) that get a
/// channel at application startup.
pub const DEFAULT_CUSTOM_SOUNDS: [&str; 3] = ["ding", "custom_sound", "shockding"];

/// Reserved sound reference meaning "use the platform default sound".
pub const DEFAULT_SOUND_NAME: &str = "default";

pub const ANDROID_RESOURCE_SCHEME: &str = "android.resource";
pub const RAW_RESOURCE_FOLDER: &str = "raw";
/// System notification sound, as reported by the platform ringtone manager.
pub const SYSTEM_DEFAULT_SOUND_URI: &str = "content://settings/system/notification_sound";

/// Checks performed before giving up on confirming a channel deletion.
pub const CHANNEL_DELETE_MAX_ATTEMPTS: u32 = 8;
