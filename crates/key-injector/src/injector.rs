//! Key event injection over a platform backend

use key_protocol::KeyEventRequest;
use tracing::debug;

use crate::{InjectorResult, KeyEventBackend, KeySynthesizer};

/// Stateless key injector. Each call builds and posts one event.
#[derive(Debug, Clone, Default)]
pub struct KeyInjector<B> {
    backend: B,
}

impl<B: KeyEventBackend> KeyInjector<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Build the event, attach the character and post it.
    ///
    /// Codes are not range checked; whatever the OS makes of them is reported
    /// as success once the event has been posted.
    pub fn inject(&self, request: &KeyEventRequest) -> InjectorResult<()> {
        let mut event = self
            .backend
            .create_key_event(request.key_code, request.direction)?;
        self.backend
            .attach_character(&mut event, request.character_code);
        self.backend.post(event);

        debug!(
            backend = self.backend.name(),
            key_code = request.key_code,
            character_code = request.character_code,
            direction = %request.direction,
            "Posted key event"
        );
        Ok(())
    }
}

impl<B: KeyEventBackend> KeySynthesizer for KeyInjector<B> {
    fn synthesize(&self, request: &KeyEventRequest) -> InjectorResult<()> {
        self.inject(request)
    }

    fn name(&self) -> &'static str {
        self.backend.name()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use key_protocol::{CharCode, KeyCode, KeyDirection};
    use parking_lot::Mutex;

    use super::*;
    use crate::KeyInjectorError;

    const KEY_A: KeyCode = 0x00;
    const CHAR_A: CharCode = b'a' as CharCode;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct RecordedEvent {
        key_code: KeyCode,
        direction: KeyDirection,
        character_code: Option<CharCode>,
    }

    /// Records posted events; can be told to fail event creation
    #[derive(Default)]
    struct RecordingBackend {
        fail_creation: bool,
        attempts: AtomicUsize,
        posted: Mutex<Vec<RecordedEvent>>,
    }

    impl RecordingBackend {
        fn failing() -> Self {
            Self {
                fail_creation: true,
                ..Default::default()
            }
        }

        fn posted(&self) -> Vec<RecordedEvent> {
            self.posted.lock().clone()
        }
    }

    impl KeyEventBackend for RecordingBackend {
        type Event = RecordedEvent;

        fn name(&self) -> &'static str {
            "recording"
        }

        fn create_key_event(
            &self,
            key_code: KeyCode,
            direction: KeyDirection,
        ) -> InjectorResult<RecordedEvent> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_creation {
                return Err(KeyInjectorError::EventCreationFailed {
                    key_code,
                    direction,
                });
            }
            Ok(RecordedEvent {
                key_code,
                direction,
                character_code: None,
            })
        }

        fn attach_character(&self, event: &mut RecordedEvent, character_code: CharCode) {
            event.character_code = Some(character_code);
        }

        fn post(&self, event: RecordedEvent) {
            self.posted.lock().push(event);
        }
    }

    #[test]
    fn test_key_down_then_up() {
        let injector = KeyInjector::new(RecordingBackend::default());

        let down = KeyEventRequest::key_down(CHAR_A, KEY_A);
        injector.inject(&down).unwrap();
        injector.inject(&down.released()).unwrap();

        assert_eq!(
            injector.backend().posted(),
            vec![
                RecordedEvent {
                    key_code: KEY_A,
                    direction: KeyDirection::Down,
                    character_code: Some(CHAR_A),
                },
                RecordedEvent {
                    key_code: KEY_A,
                    direction: KeyDirection::Up,
                    character_code: Some(CHAR_A),
                },
            ]
        );
    }

    #[test]
    fn test_character_does_not_replace_key_code() {
        let injector = KeyInjector::new(RecordingBackend::default());

        // 'a' on the B key position is passed through untouched
        injector
            .inject(&KeyEventRequest::key_down(CHAR_A, 0x0B))
            .unwrap();

        let posted = injector.backend().posted();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].key_code, 0x0B);
        assert_eq!(posted[0].character_code, Some(CHAR_A));
    }

    #[test]
    fn test_creation_failure_posts_nothing() {
        let injector = KeyInjector::new(RecordingBackend::failing());

        let err = injector
            .inject(&KeyEventRequest::key_down(CHAR_A, KEY_A))
            .unwrap_err();

        assert!(err.is_construction_failure());
        assert!(injector.backend().posted().is_empty());
    }

    #[test]
    fn test_repeated_failures_are_independent() {
        let injector = KeyInjector::new(RecordingBackend::failing());

        for _ in 0..5 {
            let result = injector.inject(&KeyEventRequest::key_up(CHAR_A, KEY_A));
            assert!(matches!(
                result,
                Err(KeyInjectorError::EventCreationFailed {
                    key_code: KEY_A,
                    direction: KeyDirection::Up,
                })
            ));
        }

        assert_eq!(injector.backend().attempts.load(Ordering::SeqCst), 5);
        assert!(injector.backend().posted().is_empty());
    }

    #[test]
    fn test_out_of_range_codes_forwarded() {
        let injector = KeyInjector::new(RecordingBackend::default());

        injector
            .inject(&KeyEventRequest::new(0xFFFF, 0xFFFF, true))
            .unwrap();

        assert_eq!(
            injector.backend().posted(),
            vec![RecordedEvent {
                key_code: 0xFFFF,
                direction: KeyDirection::Down,
                character_code: Some(0xFFFF),
            }]
        );
    }

    #[test]
    fn test_synthesizer_trait_object() {
        let synth: Box<dyn KeySynthesizer> =
            Box::new(KeyInjector::new(RecordingBackend::default()));

        assert_eq!(synth.name(), "recording");
        synth
            .synthesize(&KeyEventRequest::key_down(CHAR_A, KEY_A))
            .unwrap();
    }

    #[test]
    fn test_concurrent_calls_post_one_event_each() {
        let injector = Arc::new(KeyInjector::new(RecordingBackend::default()));

        std::thread::scope(|scope| {
            for key_code in 0..8u16 {
                let injector = Arc::clone(&injector);
                scope.spawn(move || {
                    injector
                        .inject(&KeyEventRequest::key_down(CHAR_A, key_code))
                        .unwrap();
                });
            }
        });

        let mut keys: Vec<KeyCode> = injector
            .backend()
            .posted()
            .iter()
            .map(|event| event.key_code)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, (0..8u16).collect::<Vec<_>>());
    }
}
