//! Injector configuration

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::KeyInjectorError;

/// Where in the OS event pipeline synthetic events are posted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TapLocation {
    /// Global session input stream, seen by every application
    #[default]
    Session,
    /// Where HID system events enter the window server
    Hid,
    /// Session stream, after annotation
    AnnotatedSession,
}

/// Event source state the synthetic events inherit from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventSourceState {
    #[default]
    HidSystem,
    CombinedSession,
    Private,
}

/// Key injector configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    pub tap_location: TapLocation,
    pub source_state: EventSourceState,
}

impl InjectorConfig {
    pub fn with_tap_location(mut self, tap_location: TapLocation) -> Self {
        self.tap_location = tap_location;
        self
    }

    pub fn with_source_state(mut self, source_state: EventSourceState) -> Self {
        self.source_state = source_state;
        self
    }
}

impl FromStr for TapLocation {
    type Err = KeyInjectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "session" => Ok(TapLocation::Session),
            "hid" => Ok(TapLocation::Hid),
            "annotated-session" | "annotated" => Ok(TapLocation::AnnotatedSession),
            other => Err(KeyInjectorError::InvalidRequest(format!(
                "unknown tap location: {other}"
            ))),
        }
    }
}

impl FromStr for EventSourceState {
    type Err = KeyInjectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hid-system" | "hid" => Ok(EventSourceState::HidSystem),
            "combined-session" | "combined" => Ok(EventSourceState::CombinedSession),
            "private" => Ok(EventSourceState::Private),
            other => Err(KeyInjectorError::InvalidRequest(format!(
                "unknown event source state: {other}"
            ))),
        }
    }
}
