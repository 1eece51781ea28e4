use std::fmt::{Display, Formatter};

use crate::channels::error::ChannelsError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessagingErrorCode {
    InvalidPayload,
    PostFailed,
    Internal,
}

impl MessagingErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessagingErrorCode::InvalidPayload => "messaging/invalid-payload",
            MessagingErrorCode::PostFailed => "messaging/post-failed",
            MessagingErrorCode::Internal => "messaging/internal",
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessagingError {
    pub code: MessagingErrorCode,
    message: String,
}

impl MessagingError {
    pub fn new(code: MessagingErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for MessagingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for MessagingError {}

pub type MessagingResult<T> = Result<T, MessagingError>;

pub fn invalid_payload(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::InvalidPayload, message)
}

pub fn post_failed(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::PostFailed, message)
}

pub fn internal_error(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::Internal, message)
}

/// A channel reconciliation error surfaced through the dispatcher, keeping
/// the channels-side code text in the message.
pub fn channel_failure(err: &ChannelsError) -> MessagingError {
    MessagingError::new(
        MessagingErrorCode::Internal,
        format!("channel reconciliation failed: {err}"),
    )
}
