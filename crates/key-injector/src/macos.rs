//! macOS key injection using CGEvent

use core_graphics::event::{CGEvent, CGEventTapLocation};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use key_protocol::{CharCode, KeyCode, KeyDirection};
use tracing::debug;

use crate::{
    EventSourceState, InjectorConfig, InjectorResult, KeyEventBackend, KeyInjectorError,
    TapLocation,
};

/// macOS backend using Core Graphics events
#[derive(Debug, Clone, Default)]
pub struct MacOSKeyBackend {
    config: InjectorConfig,
}

impl MacOSKeyBackend {
    pub fn new(config: InjectorConfig) -> Self {
        debug!(
            tap_location = ?config.tap_location,
            source_state = ?config.source_state,
            "Creating macOS key backend"
        );
        Self { config }
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    fn tap_location(&self) -> CGEventTapLocation {
        match self.config.tap_location {
            TapLocation::Session => CGEventTapLocation::Session,
            TapLocation::Hid => CGEventTapLocation::HID,
            TapLocation::AnnotatedSession => CGEventTapLocation::AnnotatedSession,
        }
    }

    fn source_state(&self) -> CGEventSourceStateID {
        match self.config.source_state {
            EventSourceState::HidSystem => CGEventSourceStateID::HIDSystemState,
            EventSourceState::CombinedSession => CGEventSourceStateID::CombinedSessionState,
            EventSourceState::Private => CGEventSourceStateID::Private,
        }
    }
}

impl KeyEventBackend for MacOSKeyBackend {
    type Event = CGEvent;

    fn name(&self) -> &'static str {
        "macos-cgevent"
    }

    fn create_key_event(
        &self,
        key_code: KeyCode,
        direction: KeyDirection,
    ) -> InjectorResult<CGEvent> {
        let source = CGEventSource::new(self.source_state())
            .map_err(|_| KeyInjectorError::EventSourceUnavailable)?;

        CGEvent::new_keyboard_event(source, key_code, direction.is_down()).map_err(|_| {
            KeyInjectorError::EventCreationFailed {
                key_code,
                direction,
            }
        })
    }

    fn attach_character(&self, event: &mut CGEvent, character_code: CharCode) {
        // Lone surrogates and other odd units go through as-is
        event.set_string_from_utf16_unchecked(&[character_code]);
    }

    fn post(&self, event: CGEvent) {
        event.post(self.tap_location());
    }
}
