//! Key injection error types

use key_protocol::{KeyCode, KeyDirection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyInjectorError {
    #[error("Failed to create keyboard event source")]
    EventSourceUnavailable,

    #[error("Failed to create key {direction} event for key code {key_code:#06x}")]
    EventCreationFailed {
        key_code: KeyCode,
        direction: KeyDirection,
    },

    #[error("Platform not supported")]
    UnsupportedPlatform,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl KeyInjectorError {
    /// True when the OS could not hand out a usable event object
    pub fn is_construction_failure(&self) -> bool {
        matches!(
            self,
            KeyInjectorError::EventSourceUnavailable | KeyInjectorError::EventCreationFailed { .. }
        )
    }
}

pub type InjectorResult<T> = Result<T, KeyInjectorError>;
