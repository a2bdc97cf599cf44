//! Key injector trait abstraction

use key_protocol::{CharCode, KeyCode, KeyDirection, KeyEventRequest};

use crate::InjectorResult;

/// Synthesizes system-wide key events
pub trait KeySynthesizer: Send + Sync {
    /// Post exactly one key event to the system input stream.
    ///
    /// Either the event is constructed and posted, or an error is returned
    /// and nothing is posted.
    fn synthesize(&self, request: &KeyEventRequest) -> InjectorResult<()>;

    /// Backend name, for logs
    fn name(&self) -> &'static str;
}

/// Platform event facility used by [`crate::KeyInjector`]
pub trait KeyEventBackend: Send + Sync {
    /// Platform keyboard event object
    type Event;

    fn name(&self) -> &'static str;

    /// Create a keyboard event for the key position and direction
    fn create_key_event(
        &self,
        key_code: KeyCode,
        direction: KeyDirection,
    ) -> InjectorResult<Self::Event>;

    /// Attach the produced character to the event
    fn attach_character(&self, event: &mut Self::Event, character_code: CharCode);

    /// Post the event to the system-wide input stream
    fn post(&self, event: Self::Event);
}
