use std::fmt;

use url::Url;

use crate::channels::constants::{
    ANDROID_RESOURCE_SCHEME, RAW_RESOURCE_FOLDER, SYSTEM_DEFAULT_SOUND_URI,
};
use crate::channels::error::{invalid_sound_uri, ChannelsResult};

/// Channel importance as exposed by the platform notification manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Importance {
    Min,
    Low,
    Default,
    High,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Min => "min",
            Importance::Low => "low",
            Importance::Default => "default",
            Importance::High => "high",
        }
    }
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Default
    }
}

/// Audio routing declared for a channel sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioUsage {
    Notification,
    Alarm,
}

/// What kind of audio the sound is, for platform volume/focus handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioContentType {
    Sonification,
    Music,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioAttributes {
    pub usage: AudioUsage,
    pub content_type: AudioContentType,
}

impl AudioAttributes {
    /// Attributes every notification sound is bound with: notification usage,
    /// sonification content.
    pub fn notification() -> Self {
        Self {
            usage: AudioUsage::Notification,
            content_type: AudioContentType::Sonification,
        }
    }
}

/// Validated sound location handed to the platform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SoundUri {
    value: String,
}

impl SoundUri {
    /// URI for a sound bundled in the application's raw resource folder:
    /// `android.resource://{package}/raw/{name}`.
    pub fn bundled_raw(package: &str, name: &str) -> ChannelsResult<Self> {
        if package.is_empty() {
            return Err(invalid_sound_uri("package name must not be empty"));
        }
        if name.is_empty() {
            return Err(invalid_sound_uri("sound resource name must not be empty"));
        }
        let value = format!("{ANDROID_RESOURCE_SCHEME}://{package}/{RAW_RESOURCE_FOLDER}/{name}");
        Url::parse(&value)
            .map_err(|err| invalid_sound_uri(format!("Invalid sound URI '{value}': {err}")))?;
        Ok(Self { value })
    }

    /// The system notification sound.
    pub fn system_default() -> Self {
        Self {
            value: SYSTEM_DEFAULT_SOUND_URI.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SoundUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A sound URI plus the playback attributes it is bound with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundBinding {
    pub uri: SoundUri,
    pub audio: AudioAttributes,
}

impl SoundBinding {
    pub fn notification(uri: SoundUri) -> Self {
        Self {
            uri,
            audio: AudioAttributes::notification(),
        }
    }
}

/// What the policy wants a channel to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    pub importance: Importance,
    pub lights_enabled: bool,
    pub vibration_enabled: bool,
    pub sound: Option<SoundBinding>,
}

impl ChannelSpec {
    /// The only channel shape this crate creates: high importance, lights and
    /// vibration on, the sound (when present) bound with notification audio
    /// attributes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sound: Option<SoundUri>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            importance: Importance::High,
            lights_enabled: true,
            vibration_enabled: true,
            sound: sound.map(SoundBinding::notification),
        }
    }

    pub fn sound_uri(&self) -> Option<&SoundUri> {
        self.sound.as_ref().map(|binding| &binding.uri)
    }
}

/// What the registry reports back for an existing channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelRecord {
    pub id: String,
    pub name: String,
    pub importance: Importance,
    pub sound: Option<SoundUri>,
}

impl ChannelRecord {
    pub fn from_spec(spec: &ChannelSpec) -> Self {
        Self {
            id: spec.id.clone(),
            name: spec.name.clone(),
            importance: spec.importance,
            sound: spec.sound_uri().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_raw_builds_android_resource_uri() {
        let uri = SoundUri::bundled_raw("gr.example.app", "ding").unwrap();
        assert_eq!(uri.as_str(), "android.resource://gr.example.app/raw/ding");
    }

    #[test]
    fn bundled_raw_rejects_empty_parts() {
        let err = SoundUri::bundled_raw("", "ding").unwrap_err();
        assert_eq!(err.code_str(), "channels/invalid-sound-uri");
        let err = SoundUri::bundled_raw("gr.example.app", "").unwrap_err();
        assert_eq!(err.code_str(), "channels/invalid-sound-uri");
    }

    #[test]
    fn system_default_points_at_settings_provider() {
        assert_eq!(
            SoundUri::system_default().as_str(),
            "content://settings/system/notification_sound"
        );
    }

    #[test]
    fn spec_defaults_to_alerting_shape() {
        let uri = SoundUri::bundled_raw("gr.example.app", "ding").unwrap();
        let spec = ChannelSpec::new("id", "Name", "Description", Some(uri.clone()));
        assert_eq!(spec.importance, Importance::High);
        assert!(spec.lights_enabled);
        assert!(spec.vibration_enabled);
        let binding = spec.sound.as_ref().unwrap();
        assert_eq!(binding.audio, AudioAttributes::notification());
        assert_eq!(spec.sound_uri(), Some(&uri));
    }

    #[test]
    fn record_mirrors_spec() {
        let spec = ChannelSpec::new("id", "Name", "Description", None);
        let record = ChannelRecord::from_spec(&spec);
        assert_eq!(record.id, "id");
        assert_eq!(record.importance, Importance::High);
        assert!(record.sound.is_none());
    }
}
