//! Shared key event definitions for syskey
//!
//! Plain data passed from a caller (remapper, on-screen keyboard, test
//! harness) to the key injector. Nothing here is validated: codes are
//! forwarded to the operating system as given.

mod request;

pub use request::*;

/// Platform key code identifying a physical key position (`CGKeyCode` on macOS)
pub type KeyCode = u16;

/// Character code the event reports as produced (`CGCharCode`, one UTF-16 unit)
pub type CharCode = u16;
