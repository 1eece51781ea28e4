use std::collections::HashSet;

use crate::channels::constants::DEFAULT_CUSTOM_SOUNDS;

/// The application's bundled sound resources, as the platform sees them.
///
/// Models the raw-resource lookup of the platform resource table: a sound is
/// playable only if a resource with its bare name is bundled.
pub trait SoundCatalog: Send + Sync {
    /// Package name used when building resource URIs.
    fn package_name(&self) -> String;

    /// Returns the bundled resource name for `name`, or `None` when the
    /// application ships no such sound.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Catalog backed by a fixed set of bundled sound names.
#[derive(Clone, Debug)]
pub struct StaticSoundCatalog {
    package: String,
    sounds: HashSet<String>,
}

impl StaticSoundCatalog {
    pub fn new<I, S>(package: impl Into<String>, sounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package: package.into(),
            sounds: sounds.into_iter().map(Into::into).collect(),
        }
    }

    /// Catalog listing the sounds bundled by default.
    pub fn well_known(package: impl Into<String>) -> Self {
        Self::new(package, DEFAULT_CUSTOM_SOUNDS)
    }
}

impl SoundCatalog for StaticSoundCatalog {
    fn package_name(&self) -> String {
        self.package.clone()
    }

    fn lookup(&self, name: &str) -> Option<String> {
        if self.sounds.contains(name) {
            Some(name.to_owned())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_catalog_lists_bundled_sounds() {
        let catalog = StaticSoundCatalog::well_known("gr.example.app");
        assert_eq!(catalog.package_name(), "gr.example.app");
        assert_eq!(catalog.lookup("ding"), Some("ding".to_string()));
        assert_eq!(catalog.lookup("shockding"), Some("shockding".to_string()));
        assert_eq!(catalog.lookup("airhorn"), None);
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = StaticSoundCatalog::new("gr.example.app", ["ding"]);
        assert_eq!(catalog.lookup("Ding"), None);
        assert_eq!(catalog.lookup("ding.wav"), None);
    }
}
