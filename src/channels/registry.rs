//! Platform channel table abstraction.
//!
//! Models the create/query/delete surface of the platform notification
//! manager. The in-memory implementation keeps everything in-process so the
//! policy can be exercised without a device; hosts plug in a real backend
//! through the same trait.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::channels::error::ChannelsResult;
use crate::channels::types::{ChannelRecord, ChannelSpec};

/// Abstraction over the platform notification-channel table.
///
/// Channels are immutable once created: `create_channel` for an id that
/// already exists must leave the existing definition (in particular its
/// sound) untouched. Changing a channel's sound therefore requires deleting
/// the channel and creating it again.
#[async_trait::async_trait]
pub trait ChannelRegistry: Send + Sync {
    async fn create_channel(&self, spec: &ChannelSpec) -> ChannelsResult<()>;
    async fn get_channel(&self, id: &str) -> ChannelsResult<Option<ChannelRecord>>;
    async fn delete_channel(&self, id: &str) -> ChannelsResult<()>;
    async fn list_channels(&self) -> ChannelsResult<Vec<ChannelRecord>>;
}

/// In-memory channel table.
///
/// Deletions can be given a lag: a deleted channel keeps answering
/// `get_channel` for the configured number of polls before it disappears,
/// mimicking the asynchronous removal real registries exhibit.
#[derive(Default)]
pub struct InMemoryChannelRegistry {
    inner: Mutex<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    channels: HashMap<String, ChannelRecord>,
    pending_deletes: HashMap<String, u32>,
    deletion_lag: u32,
    create_calls: u32,
    delete_calls: u32,
}

impl InMemoryChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose deletions stay visible for `lag` further polls.
    pub fn with_deletion_lag(lag: u32) -> Self {
        let registry = Self::default();
        registry.inner.lock().unwrap().deletion_lag = lag;
        registry
    }

    /// Number of `create_channel` calls observed.
    pub fn create_calls(&self) -> u32 {
        self.inner.lock().unwrap().create_calls
    }

    /// Number of `delete_channel` calls observed.
    pub fn delete_calls(&self) -> u32 {
        self.inner.lock().unwrap().delete_calls
    }
}

#[async_trait::async_trait]
impl ChannelRegistry for InMemoryChannelRegistry {
    async fn create_channel(&self, spec: &ChannelSpec) -> ChannelsResult<()> {
        let mut state = self.inner.lock().unwrap();
        state.create_calls += 1;
        // A create lands after any still-pending delete for the same id.
        if state.pending_deletes.remove(&spec.id).is_some() {
            state.channels.remove(&spec.id);
        }
        if state.channels.contains_key(&spec.id) {
            log::debug!("channel '{}' already exists; create left it unchanged", spec.id);
            return Ok(());
        }
        state
            .channels
            .insert(spec.id.clone(), ChannelRecord::from_spec(spec));
        Ok(())
    }

    async fn get_channel(&self, id: &str) -> ChannelsResult<Option<ChannelRecord>> {
        let mut state = self.inner.lock().unwrap();
        if let Some(remaining) = state.pending_deletes.get_mut(id) {
            if *remaining == 0 {
                state.pending_deletes.remove(id);
                state.channels.remove(id);
                return Ok(None);
            }
            *remaining -= 1;
        }
        Ok(state.channels.get(id).cloned())
    }

    async fn delete_channel(&self, id: &str) -> ChannelsResult<()> {
        let mut state = self.inner.lock().unwrap();
        state.delete_calls += 1;
        if !state.channels.contains_key(id) {
            return Ok(());
        }
        if state.deletion_lag == 0 {
            state.channels.remove(id);
        } else {
            let lag = state.deletion_lag;
            state.pending_deletes.insert(id.to_string(), lag);
        }
        Ok(())
    }

    async fn list_channels(&self) -> ChannelsResult<Vec<ChannelRecord>> {
        let state = self.inner.lock().unwrap();
        let mut channels: Vec<_> = state.channels.values().cloned().collect();
        channels.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(channels)
    }
}
