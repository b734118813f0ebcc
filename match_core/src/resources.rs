use rand::Rng;

use crate::components::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random choices made when serving
pub trait ServeRng {
    /// Launch angle drawn uniformly from `[-max, max]` radians
    fn serve_angle(&mut self, max: f32) -> f32;
    /// Fair coin, used to pick the serving side on restart
    fn coin_flip(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl ServeRng for GameRng {
    fn serve_angle(&mut self, max: f32) -> f32 {
        if max <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-max..=max)
    }

    fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    pub serve_ended: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Single-slot cancellable countdown for the end of a serve.
///
/// Arming always replaces whatever was pending, so an expiry left over from an
/// earlier serve can never end a newer one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeTimer {
    remaining_ms: Option<f32>,
}

impl ServeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending countdown and start a new one
    pub fn arm(&mut self, delay_ms: f32) {
        self.cancel();
        self.remaining_ms = Some(delay_ms.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<f32> {
        self.remaining_ms
    }

    /// Advance by `dt_ms`. Returns true exactly once, when the countdown runs out.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        match self.remaining_ms {
            Some(remaining) => {
                let left = remaining - dt_ms.max(0.0);
                if left <= 0.0 {
                    self.remaining_ms = None;
                    true
                } else {
                    self.remaining_ms = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}

/// Serve status: while serving the ball is held by a paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    pub is_serving: bool,
    pub timer: ServeTimer,
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter serving and schedule its end
    pub fn begin(&mut self, delay_ms: f32) {
        self.is_serving = true;
        self.timer.arm(delay_ms);
    }

    /// Advance the pending serve-end. Returns true on the tick the serve ends.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        if self.timer.advance(dt_ms) && self.is_serving {
            self.is_serving = false;
            return true;
        }
        false
    }
}
