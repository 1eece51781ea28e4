use crate::channels::settings::ChannelSettings;
use crate::channels::sound::{clean_sound_name, is_default_sound};

/// Derives the channel id a message maps to.
///
/// Total: every combination of inputs yields an id. The sound name feeds the
/// id in its extension-stripped form and before any resource lookup, so a
/// sound the application does not bundle still maps to the same channel.
pub fn derive_channel_id(
    settings: &ChannelSettings,
    explicit: Option<&str>,
    sound: Option<&str>,
) -> String {
    if let Some(id) = explicit {
        if !id.is_empty() {
            return id.to_string();
        }
    }
    if !is_default_sound(sound) {
        if let Some(raw) = sound {
            let cleaned = clean_sound_name(raw);
            if !cleaned.is_empty() {
                return settings.custom_channel_id(cleaned);
            }
        }
    }
    settings.default_channel_id.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ChannelSettings {
        ChannelSettings::default()
    }

    #[test]
    fn custom_sound_maps_to_prefixed_channel() {
        assert_eq!(
            derive_channel_id(&settings(), None, Some("ding")),
            "custom_sound_channel_ding"
        );
    }

    #[test]
    fn explicit_id_wins_over_sound() {
        assert_eq!(derive_channel_id(&settings(), Some("foo"), Some("ding")), "foo");
    }

    #[test]
    fn no_sound_and_default_marker_map_to_default_channel() {
        assert_eq!(derive_channel_id(&settings(), None, None), "default");
        assert_eq!(derive_channel_id(&settings(), None, Some("default")), "default");
        assert_eq!(derive_channel_id(&settings(), None, Some("")), "default");
    }

    #[test]
    fn sound_extension_does_not_change_the_identity() {
        assert_eq!(
            derive_channel_id(&settings(), None, Some("ding.wav")),
            "custom_sound_channel_ding"
        );
    }

    #[test]
    fn empty_explicit_id_is_treated_as_absent() {
        assert_eq!(
            derive_channel_id(&settings(), Some(""), Some("ding")),
            "custom_sound_channel_ding"
        );
    }

    #[test]
    fn unbundled_sound_still_gets_its_own_identity() {
        assert_eq!(
            derive_channel_id(&settings(), None, Some("airhorn")),
            "custom_sound_channel_airhorn"
        );
    }
}
