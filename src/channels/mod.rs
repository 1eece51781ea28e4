#![doc = include_str!("README.md")]
mod api;
mod catalog;
mod constants;
pub mod error;
mod identity;
mod reconcile;
mod registry;
mod settings;
mod sound;
mod types;

pub use api::{ChannelManager, EnsureOutcome, PreregistrationReport};
pub use catalog::{SoundCatalog, StaticSoundCatalog};
pub use identity::derive_channel_id;
pub use reconcile::{plan_channel_action, ChannelAction};
pub use registry::{ChannelRegistry, InMemoryChannelRegistry};
pub use settings::ChannelSettings;
pub use sound::{clean_sound_name, is_default_sound, resolve_sound};
pub use types::{
    AudioAttributes, AudioContentType, AudioUsage, ChannelRecord, ChannelSpec, Importance,
    SoundBinding, SoundUri,
};
