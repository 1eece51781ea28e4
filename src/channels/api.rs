use std::fmt;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use async_lock::OnceCell;

use crate::channels::catalog::SoundCatalog;
use crate::channels::constants::{
    CHANNEL_DELETE_MAX_ATTEMPTS, MESSAGE_CHANNEL_DESCRIPTION, MESSAGE_CHANNEL_NAME,
};
use crate::channels::error::{ChannelsError, ChannelsResult};
use crate::channels::identity::derive_channel_id;
use crate::channels::reconcile::{plan_channel_action, ChannelAction};
use crate::channels::registry::ChannelRegistry;
use crate::channels::settings::ChannelSettings;
use crate::channels::sound::{clean_sound_name, resolve_sound};
use crate::channels::types::{ChannelSpec, SoundUri};
use crate::logger::Logger;
use crate::platform::runtime;
use crate::util::backoff;

static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("fcm-sound-channels/channels"));

/// What [`ChannelManager::ensure_channel`] did to satisfy a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    Reused,
    Recreated,
}

/// Summary of a preregistration run.
#[derive(Clone, Debug, Default)]
pub struct PreregistrationReport {
    /// Channel ids that exist after the run.
    pub ensured: Vec<String>,
    /// Configured sounds the application does not bundle; their channels were
    /// registered without a custom sound.
    pub missing_sounds: Vec<String>,
    /// Channels the registry refused, with the error. Failures never abort
    /// the remaining registrations.
    pub failures: Vec<(String, ChannelsError)>,
}

impl PreregistrationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Channel policy service: sound resolution, identity derivation, and
/// registry reconciliation, over pluggable platform backends.
#[derive(Clone)]
pub struct ChannelManager {
    inner: Arc<ChannelManagerInner>,
}

struct ChannelManagerInner {
    settings: ChannelSettings,
    registry: Arc<dyn ChannelRegistry>,
    catalog: Arc<dyn SoundCatalog>,
    preregistration: OnceCell<PreregistrationReport>,
}

impl fmt::Debug for ChannelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelManager")
            .field("settings", &self.inner.settings)
            .finish()
    }
}

impl ChannelManager {
    pub fn new(
        settings: ChannelSettings,
        registry: Arc<dyn ChannelRegistry>,
        catalog: Arc<dyn SoundCatalog>,
    ) -> ChannelsResult<Self> {
        settings.validate()?;
        Ok(Self {
            inner: Arc::new(ChannelManagerInner {
                settings,
                registry,
                catalog,
                preregistration: OnceCell::new(),
            }),
        })
    }

    pub fn settings(&self) -> &ChannelSettings {
        &self.inner.settings
    }

    pub fn registry(&self) -> Arc<dyn ChannelRegistry> {
        Arc::clone(&self.inner.registry)
    }

    pub fn catalog(&self) -> Arc<dyn SoundCatalog> {
        Arc::clone(&self.inner.catalog)
    }

    /// Resolves a requested sound reference to a playable URI; `None` means
    /// the channel's default sound applies.
    pub fn resolve_sound(&self, requested: Option<&str>) -> Option<SoundUri> {
        resolve_sound(self.inner.catalog.as_ref(), requested)
    }

    /// Channel identity for a message's explicit id and sound reference.
    pub fn channel_id_for(&self, explicit: Option<&str>, sound: Option<&str>) -> String {
        derive_channel_id(&self.inner.settings, explicit, sound)
    }

    /// The [`ChannelSpec`] the policy wants for `channel_id` carrying `sound`.
    ///
    /// Naming follows the configured scheme for ids the policy owns (the
    /// default, fallback and per-sound channels); explicit ids from messages
    /// the policy does not recognize get a generic name.
    pub fn spec_for(&self, channel_id: &str, sound: Option<SoundUri>) -> ChannelSpec {
        let settings = &self.inner.settings;
        if channel_id == settings.default_channel_id {
            return ChannelSpec::new(
                channel_id,
                settings.default_channel_name.clone(),
                settings.default_channel_description.clone(),
                sound,
            );
        }
        if channel_id == settings.fallback_channel_id() {
            return ChannelSpec::new(
                channel_id,
                settings.custom_channel_name.clone(),
                settings.custom_channel_description.clone(),
                sound,
            );
        }
        let sound_prefix = format!("{}_", settings.channel_prefix);
        if let Some(suffix) = channel_id.strip_prefix(&sound_prefix) {
            if !suffix.is_empty() {
                return ChannelSpec::new(
                    channel_id,
                    settings.custom_channel_name_for(suffix),
                    settings.custom_channel_description_for(suffix),
                    sound,
                );
            }
        }
        ChannelSpec::new(channel_id, MESSAGE_CHANNEL_NAME, MESSAGE_CHANNEL_DESCRIPTION, sound)
    }

    /// Makes the registry channel match the spec.
    ///
    /// Since channel sounds are immutable, a mismatch is resolved by deleting
    /// the channel, waiting until the registry confirms the deletion, and
    /// creating the new definition under the same id.
    pub async fn ensure_channel(&self, spec: &ChannelSpec) -> ChannelsResult<EnsureOutcome> {
        let existing = self.inner.registry.get_channel(&spec.id).await?;
        let action = plan_channel_action(existing.as_ref(), spec.sound_uri());
        LOGGER.debug(format!("ensure channel '{}': {:?}", spec.id, action));
        match action {
            ChannelAction::Reuse => Ok(EnsureOutcome::Reused),
            ChannelAction::CreateFresh => {
                self.inner.registry.create_channel(spec).await?;
                Ok(EnsureOutcome::Created)
            }
            ChannelAction::Recreate => {
                self.inner.registry.delete_channel(&spec.id).await?;
                self.wait_for_channel_absent(&spec.id).await?;
                self.inner.registry.create_channel(spec).await?;
                Ok(EnsureOutcome::Recreated)
            }
        }
    }

    /// Ensures the channel a message needs, given its id and resolved sound.
    pub async fn ensure_channel_for(
        &self,
        channel_id: &str,
        sound: Option<SoundUri>,
    ) -> ChannelsResult<EnsureOutcome> {
        let spec = self.spec_for(channel_id, sound);
        self.ensure_channel(&spec).await
    }

    /// Polls the registry until a deleted channel stops being reported.
    ///
    /// Deletion is asynchronous on real platforms; recreating before it
    /// lands silently keeps the old sound. Waits are jittered and grow per
    /// attempt. Once the attempts are used up the recreate proceeds anyway
    /// rather than losing the notification.
    async fn wait_for_channel_absent(&self, id: &str) -> ChannelsResult<()> {
        let mut attempts = 0u32;
        loop {
            if self.inner.registry.get_channel(id).await?.is_none() {
                return Ok(());
            }
            if attempts >= CHANNEL_DELETE_MAX_ATTEMPTS {
                LOGGER.warn(format!(
                    "Channel '{id}' still present after {attempts} deletion checks; recreating anyway"
                ));
                return Ok(());
            }
            let wait = backoff::calculate_backoff_millis(attempts);
            runtime::sleep(Duration::from_millis(wait)).await;
            attempts = attempts.saturating_add(1);
        }
    }

    /// Registers the well-known channel set: one channel per configured
    /// sound, the fallback channel, and the default channel (the latter two
    /// with the system default sound).
    ///
    /// A sound the application does not bundle still gets its channel,
    /// without a custom sound binding. A registry failure for one channel is
    /// recorded and the loop continues.
    pub async fn preregister(&self) -> PreregistrationReport {
        let settings = &self.inner.settings;
        let mut report = PreregistrationReport::default();

        for sound in &settings.custom_sounds {
            let cleaned = clean_sound_name(sound).to_string();
            let resolved = self.resolve_sound(Some(sound));
            if resolved.is_none() {
                report.missing_sounds.push(cleaned.clone());
            }
            let channel_id = settings.custom_channel_id(&cleaned);
            let spec = ChannelSpec::new(
                channel_id.clone(),
                settings.custom_channel_name_for(&cleaned),
                settings.custom_channel_description_for(&cleaned),
                resolved,
            );
            self.register_channel(spec, &mut report).await;
        }

        let fallback = ChannelSpec::new(
            settings.fallback_channel_id(),
            settings.custom_channel_name.clone(),
            settings.custom_channel_description.clone(),
            Some(SoundUri::system_default()),
        );
        self.register_channel(fallback, &mut report).await;

        let default = ChannelSpec::new(
            settings.default_channel_id.clone(),
            settings.default_channel_name.clone(),
            settings.default_channel_description.clone(),
            Some(SoundUri::system_default()),
        );
        self.register_channel(default, &mut report).await;

        LOGGER.info(format!(
            "Preregistered {} channels ({} missing sounds, {} failures)",
            report.ensured.len(),
            report.missing_sounds.len(),
            report.failures.len()
        ));
        report
    }

    /// Runs [`preregister`](Self::preregister) at most once per manager;
    /// later and concurrent callers share the first run's report.
    pub async fn ensure_preregistered(&self) -> PreregistrationReport {
        self.inner
            .preregistration
            .get_or_init(|| async move { self.preregister().await })
            .await
            .clone()
    }

    async fn register_channel(&self, spec: ChannelSpec, report: &mut PreregistrationReport) {
        match self.ensure_channel(&spec).await {
            Ok(_) => report.ensured.push(spec.id),
            Err(err) => {
                LOGGER.error(format!("Error creating channel '{}': {err}", spec.id));
                report.failures.push((spec.id, err));
            }
        }
    }
}
