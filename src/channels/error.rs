use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelsErrorCode {
    InvalidSettings,
    InvalidSoundUri,
    RegistryFailure,
    Internal,
}

impl ChannelsErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelsErrorCode::InvalidSettings => "channels/invalid-settings",
            ChannelsErrorCode::InvalidSoundUri => "channels/invalid-sound-uri",
            ChannelsErrorCode::RegistryFailure => "channels/registry-failure",
            ChannelsErrorCode::Internal => "channels/internal",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelsError {
    pub code: ChannelsErrorCode,
    message: String,
}

impl ChannelsError {
    pub fn new(code: ChannelsErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for ChannelsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for ChannelsError {}

pub type ChannelsResult<T> = Result<T, ChannelsError>;

pub fn invalid_settings(message: impl Into<String>) -> ChannelsError {
    ChannelsError::new(ChannelsErrorCode::InvalidSettings, message)
}

pub fn invalid_sound_uri(message: impl Into<String>) -> ChannelsError {
    ChannelsError::new(ChannelsErrorCode::InvalidSoundUri, message)
}

pub fn registry_failure(message: impl Into<String>) -> ChannelsError {
    ChannelsError::new(ChannelsErrorCode::RegistryFailure, message)
}

pub fn internal_error(message: impl Into<String>) -> ChannelsError {
    ChannelsError::new(ChannelsErrorCode::Internal, message)
}
