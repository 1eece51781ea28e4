use crate::channels::types::{ChannelRecord, SoundUri};

/// What the reconciler must do to make a channel match the requested sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelAction {
    /// No channel exists under the id; create it.
    CreateFresh,
    /// The existing definition already carries the requested sound.
    Reuse,
    /// The existing definition conflicts; delete and create again.
    Recreate,
}

/// Pure decision table over the existing channel and the requested sound.
///
/// Channel sounds cannot change in place, so any mismatch (including
/// sound-to-none and none-to-sound) forces a delete + recreate cycle.
pub fn plan_channel_action(
    existing: Option<&ChannelRecord>,
    requested_sound: Option<&SoundUri>,
) -> ChannelAction {
    match existing {
        None => ChannelAction::CreateFresh,
        Some(record) => {
            if record.sound.as_ref() == requested_sound {
                ChannelAction::Reuse
            } else {
                ChannelAction::Recreate
            }
        }
    }
}
