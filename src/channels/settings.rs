//! Channel policy configuration.
//!
//! One settings value is shared by startup preregistration and the message
//! path, so both derive identical channel ids and naming by construction.

use crate::channels::constants::{
    CUSTOM_CHANNEL_DESCRIPTION, CUSTOM_CHANNEL_NAME, CUSTOM_CHANNEL_PREFIX,
    DEFAULT_CHANNEL_DESCRIPTION, DEFAULT_CHANNEL_ID, DEFAULT_CHANNEL_NAME, DEFAULT_CUSTOM_SOUNDS,
    DEFAULT_SOUND_NAME,
};
use crate::channels::error::{invalid_settings, ChannelsResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelSettings {
    /// Bare names of the bundled sounds that get a channel at startup.
    pub custom_sounds: Vec<String>,
    /// Prefix for per-sound channel ids; the bare prefix is the fallback
    /// channel id.
    pub channel_prefix: String,
    pub default_channel_id: String,
    pub custom_channel_name: String,
    pub custom_channel_description: String,
    pub default_channel_name: String,
    pub default_channel_description: String,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            custom_sounds: DEFAULT_CUSTOM_SOUNDS
                .iter()
                .map(|sound| sound.to_string())
                .collect(),
            channel_prefix: CUSTOM_CHANNEL_PREFIX.to_string(),
            default_channel_id: DEFAULT_CHANNEL_ID.to_string(),
            custom_channel_name: CUSTOM_CHANNEL_NAME.to_string(),
            custom_channel_description: CUSTOM_CHANNEL_DESCRIPTION.to_string(),
            default_channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            default_channel_description: DEFAULT_CHANNEL_DESCRIPTION.to_string(),
        }
    }
}

impl ChannelSettings {
    pub fn validate(&self) -> ChannelsResult<()> {
        if self.channel_prefix.trim().is_empty() {
            return Err(invalid_settings("channel_prefix must not be empty"));
        }
        if self.default_channel_id.trim().is_empty() {
            return Err(invalid_settings("default_channel_id must not be empty"));
        }
        if self.channel_prefix == self.default_channel_id {
            return Err(invalid_settings(
                "channel_prefix must differ from default_channel_id",
            ));
        }
        for sound in &self.custom_sounds {
            if sound.trim().is_empty() {
                return Err(invalid_settings("custom_sounds entries must not be empty"));
            }
            if sound == DEFAULT_SOUND_NAME {
                return Err(invalid_settings(format!(
                    "custom_sounds must not contain the reserved name '{DEFAULT_SOUND_NAME}'"
                )));
            }
        }
        Ok(())
    }

    /// Fallback channel id: the bare prefix, matching the manifest default.
    pub fn fallback_channel_id(&self) -> &str {
        &self.channel_prefix
    }

    pub fn custom_channel_id(&self, sound: &str) -> String {
        format!("{}_{}", self.channel_prefix, sound)
    }

    pub fn custom_channel_name_for(&self, sound: &str) -> String {
        format!("{} - {}", self.custom_channel_name, sound)
    }

    pub fn custom_channel_description_for(&self, sound: &str) -> String {
        format!("{} ({})", self.custom_channel_description, sound)
    }
}
