//! Scripted input source standing in for a human player

use match_core::{Key, MatchSimulator, ServeRng, Side};
use match_proto::UiEvent;

/// How the autopilot steers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hold up/down keys
    Keys,
    /// Move a pointer toward the ball
    Pointer,
}

/// Tracks the ball with the player paddle, producing UI events
pub struct Autopilot {
    mode: Mode,
    held: Option<Key>,
    pointer_y: f32,
    dead_zone: f32,
    pointer_step: f32,
}

impl Autopilot {
    pub fn new(mode: Mode, start_y: f32) -> Self {
        Self {
            mode,
            held: None,
            pointer_y: start_y,
            dead_zone: 6.0,
            pointer_step: 8.0,
        }
    }

    /// Events to send before the next tick
    pub fn events<R: ServeRng>(&mut self, sim: &MatchSimulator<R>) -> Vec<UiEvent> {
        let target = sim.ball().pos.y;
        match self.mode {
            Mode::Keys => {
                let center = sim.paddle(Side::Player).center_y(sim.config());
                let wanted = if center < target - self.dead_zone {
                    Some(Key::Down)
                } else if center > target + self.dead_zone {
                    Some(Key::Up)
                } else {
                    None
                };
                self.switch_key(wanted)
            }
            Mode::Pointer => {
                let delta = (target - self.pointer_y).clamp(-self.pointer_step, self.pointer_step);
                self.pointer_y += delta;
                vec![UiEvent::Pointer { y: self.pointer_y }]
            }
        }
    }

    fn switch_key(&mut self, wanted: Option<Key>) -> Vec<UiEvent> {
        if wanted == self.held {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(key) = self.held.take() {
            events.push(UiEvent::key_signal(key, false));
        }
        if let Some(key) = wanted {
            events.push(UiEvent::key_signal(key, true));
        }
        self.held = wanted;
        events
    }
}
