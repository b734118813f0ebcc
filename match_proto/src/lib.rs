//! Boundary protocol between the match simulator and its collaborators
//!
//! Uses postcard for compact binary serialization

use match_core::{Key, KeySignal, MatchSimulator, ServeRng, Snapshot};
use postcard::{from_bytes, to_allocvec};

// ============================================================================
// UI -> Simulator
// ============================================================================

/// Steering key on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WireKey {
    Up,
    Down,
}

impl From<Key> for WireKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Up => WireKey::Up,
            Key::Down => WireKey::Down,
        }
    }
}

impl From<WireKey> for Key {
    fn from(key: WireKey) -> Self {
        match key {
            WireKey::Up => Key::Up,
            WireKey::Down => Key::Down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum UiEvent {
    /// Steering key pressed or released
    Key { key: WireKey, pressed: bool },

    /// Raw key name from a keyboard event ("ArrowUp", "s", ...)
    KeyName { name: String, pressed: bool },

    /// Pointer moved; y is relative to the top of the field
    Pointer { y: f32 },

    /// Restart button
    Restart,
}

impl UiEvent {
    pub fn key_signal(key: Key, pressed: bool) -> Self {
        UiEvent::Key {
            key: key.into(),
            pressed,
        }
    }

    /// Route the event to the simulator. Unrecognised key names are ignored.
    pub fn apply<R: ServeRng>(&self, sim: &mut MatchSimulator<R>) {
        match self {
            UiEvent::Key { key, pressed } => {
                sim.key_signal(to_signal(Key::from(*key), *pressed));
            }
            UiEvent::KeyName { name, pressed } => {
                let signal = if *pressed {
                    KeySignal::key_down(name)
                } else {
                    KeySignal::key_up(name)
                };
                if let Some(signal) = signal {
                    sim.key_signal(signal);
                }
            }
            UiEvent::Pointer { y } => sim.set_player_target_y(*y),
            UiEvent::Restart => sim.restart(),
        }
    }
}

fn to_signal(key: Key, pressed: bool) -> KeySignal {
    if pressed {
        KeySignal::Pressed(key)
    } else {
        KeySignal::Released(key)
    }
}

// ============================================================================
// Simulator -> Renderer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectFrame {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub player: RectFrame,
    pub computer: RectFrame,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_r: f32,
    pub score_player: u32,
    pub score_computer: u32,
    pub serving: bool,
}

impl From<&Snapshot> for Frame {
    fn from(snapshot: &Snapshot) -> Self {
        let rect = |p: &match_core::PaddleView| RectFrame {
            x: p.x,
            y: p.y,
            w: p.w,
            h: p.h,
        };
        Self {
            tick: snapshot.tick,
            player: rect(&snapshot.player),
            computer: rect(&snapshot.computer),
            ball_x: snapshot.ball.x,
            ball_y: snapshot.ball.y,
            ball_r: snapshot.ball.r,
            score_player: snapshot.score.player,
            score_computer: snapshot.score.computer,
            serving: snapshot.serving,
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl UiEvent {
    /// Serialize UI event to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize UI event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
