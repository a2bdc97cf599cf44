//! Key event request definitions

use serde::{Deserialize, Serialize};

use crate::{CharCode, KeyCode};

/// Key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDirection {
    Down,
    Up,
}

impl KeyDirection {
    pub fn is_down(self) -> bool {
        matches!(self, KeyDirection::Down)
    }
}

impl From<bool> for KeyDirection {
    fn from(is_key_down: bool) -> Self {
        if is_key_down {
            KeyDirection::Down
        } else {
            KeyDirection::Up
        }
    }
}

impl std::fmt::Display for KeyDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyDirection::Down => f.write_str("down"),
            KeyDirection::Up => f.write_str("up"),
        }
    }
}

/// A single synthetic key event to inject.
///
/// `key_code` decides which key the system reports as pressed. `character_code`
/// is attached as metadata for listeners that read the produced character;
/// it never overrides the key code. A mismatched pair is passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEventRequest {
    pub character_code: CharCode,
    pub key_code: KeyCode,
    pub direction: KeyDirection,
}

impl KeyEventRequest {
    pub fn new(character_code: CharCode, key_code: KeyCode, is_key_down: bool) -> Self {
        Self {
            character_code,
            key_code,
            direction: KeyDirection::from(is_key_down),
        }
    }

    pub fn key_down(character_code: CharCode, key_code: KeyCode) -> Self {
        Self::new(character_code, key_code, true)
    }

    pub fn key_up(character_code: CharCode, key_code: KeyCode) -> Self {
        Self::new(character_code, key_code, false)
    }

    pub fn is_key_down(&self) -> bool {
        self.direction.is_down()
    }

    /// Matching key-up request for the same key and character
    pub fn released(self) -> Self {
        Self {
            direction: KeyDirection::Up,
            ..self
        }
    }
}
