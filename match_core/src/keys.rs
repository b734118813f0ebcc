//! Keyboard input handling
//!
//! Turns discrete key signals into a paddle direction. Up wins while both
//! keys are held; releasing one key hands control back to the other.

use crate::components::PaddleDirection;

/// Keys that steer the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a browser-style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Discrete key-style input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySignal {
    Pressed(Key),
    Released(Key),
}

impl KeySignal {
    /// Handle key down event by name
    pub fn key_down(name: &str) -> Option<Self> {
        Key::from_name(name).map(KeySignal::Pressed)
    }

    /// Handle key up event by name
    pub fn key_up(name: &str) -> Option<Self> {
        Key::from_name(name).map(KeySignal::Released)
    }
}

/// Held-key state for the player paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    up: bool,
    down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, signal: KeySignal) {
        match signal {
            KeySignal::Pressed(Key::Up) => self.up = true,
            KeySignal::Released(Key::Up) => self.up = false,
            KeySignal::Pressed(Key::Down) => self.down = true,
            KeySignal::Released(Key::Down) => self.down = false,
        }
    }

    pub fn direction(&self) -> PaddleDirection {
        if self.up {
            PaddleDirection::Up
        } else if self.down {
            PaddleDirection::Down
        } else {
            PaddleDirection::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("W"), Some(Key::Up));
        assert_eq!(Key::from_name("s"), Some(Key::Down));
        assert_eq!(Key::from_name("Enter"), None);
        assert_eq!(KeySignal::key_down("x"), None);
        assert_eq!(
            KeySignal::key_up("ArrowDown"),
            Some(KeySignal::Released(Key::Down))
        );
    }

    #[test]
    fn test_up_has_priority() {
        let mut keys = KeyState::new();
        keys.apply(KeySignal::Pressed(Key::Down));
        keys.apply(KeySignal::Pressed(Key::Up));
        assert_eq!(keys.direction(), PaddleDirection::Up);
    }

    #[test]
    fn test_release_restores_other_key() {
        let mut keys = KeyState::new();
        keys.apply(KeySignal::Pressed(Key::Up));
        keys.apply(KeySignal::Pressed(Key::Down));
        keys.apply(KeySignal::Released(Key::Up));
        assert_eq!(keys.direction(), PaddleDirection::Down);

        keys.apply(KeySignal::Released(Key::Down));
        assert_eq!(keys.direction(), PaddleDirection::None);
    }

    #[test]
    fn test_release_without_press_is_harmless() {
        let mut keys = KeyState::new();
        keys.apply(KeySignal::Released(Key::Up));
        assert_eq!(keys.direction(), PaddleDirection::None);
    }
}
