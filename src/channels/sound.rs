use std::sync::LazyLock;

use crate::channels::catalog::SoundCatalog;
use crate::channels::constants::DEFAULT_SOUND_NAME;
use crate::channels::types::SoundUri;
use crate::logger::Logger;

static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("fcm-sound-channels/channels"));

/// Strips a file extension from a sound reference: `"ding.wav"` -> `"ding"`.
/// References without a dot pass through unchanged.
pub fn clean_sound_name(raw: &str) -> &str {
    match raw.rfind('.') {
        Some(index) => &raw[..index],
        None => raw,
    }
}

/// True when the reference means "use the platform default sound".
pub fn is_default_sound(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(value) => value.is_empty() || value == DEFAULT_SOUND_NAME,
    }
}

/// Resolves a requested sound reference to a playable URI.
///
/// Extension-insensitive: `"ding"` and `"ding.wav"` resolve identically. A
/// reference the application does not bundle resolves to `None` with a
/// warning, so the notification still shows with the channel's default
/// sound.
pub fn resolve_sound(catalog: &dyn SoundCatalog, requested: Option<&str>) -> Option<SoundUri> {
    if is_default_sound(requested) {
        return None;
    }
    let raw = requested?;
    let cleaned = clean_sound_name(raw);
    if cleaned.is_empty() {
        LOGGER.warn(format!(
            "Sound reference '{raw}' has no usable name; falling back to the channel default"
        ));
        return None;
    }
    let Some(resource) = catalog.lookup(cleaned) else {
        LOGGER.warn(format!("Sound file not found: {cleaned}"));
        return None;
    };
    match SoundUri::bundled_raw(&catalog.package_name(), &resource) {
        Ok(uri) => {
            LOGGER.debug(format!("Resolved sound '{raw}' to {uri}"));
            Some(uri)
        }
        Err(err) => {
            LOGGER.warn(format!("Dropping unusable sound '{cleaned}': {err}"));
            None
        }
    }
}
