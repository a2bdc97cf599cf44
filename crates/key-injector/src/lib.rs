//! Key Injector - system-wide keyboard event synthesis for syskey
//!
//! Posts one synthetic key-down or key-up event into the OS global input
//! stream, as if it came from a physical keyboard. Callers own key code
//! tables, down/up pairing and timing.

mod config;
mod error;
mod injector;
mod traits;

#[cfg(target_os = "macos")]
mod macos;

pub use config::*;
pub use error::*;
pub use injector::*;
pub use traits::*;

pub use key_protocol::{CharCode, KeyCode, KeyDirection, KeyEventRequest};

#[cfg(target_os = "macos")]
pub use macos::MacOSKeyBackend;

use tracing::warn;

/// Create a platform-appropriate key injector
pub fn create_injector() -> InjectorResult<Box<dyn KeySynthesizer>> {
    create_injector_with_config(InjectorConfig::default())
}

/// Create a platform-appropriate key injector with explicit configuration
pub fn create_injector_with_config(
    config: InjectorConfig,
) -> InjectorResult<Box<dyn KeySynthesizer>> {
    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(KeyInjector::new(MacOSKeyBackend::new(config))))
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = config;
        Err(KeyInjectorError::UnsupportedPlatform)
    }
}

/// Post one key event with the default configuration, reporting why it failed
pub fn try_synthesize_system_wide_key(request: &KeyEventRequest) -> InjectorResult<()> {
    create_injector()?.synthesize(request)
}

/// Post one key event into the system-wide input stream.
///
/// Returns `false` only when the event could not be constructed (or this
/// platform has no backend); in that case nothing was posted.
pub fn synthesize_system_wide_key(
    character_code: CharCode,
    key_code: KeyCode,
    is_key_down: bool,
) -> bool {
    let request = KeyEventRequest::new(character_code, key_code, is_key_down);
    match try_synthesize_system_wide_key(&request) {
        Ok(()) => true,
        Err(e) => {
            warn!(
                key_code,
                character_code,
                direction = %request.direction,
                "Key event not posted: {}",
                e
            );
            false
        }
    }
}
