use glam::Vec2;

use crate::field::Aabb;
use crate::Config;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // left, human controlled
    Computer, // right, AI controlled
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Horizontal sign pointing away from this side's paddle
    pub fn away_sign(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }
}

/// Vertical movement request for a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleDirection {
    Up,
    Down,
    #[default]
    None,
}

impl PaddleDirection {
    /// Map a wire-style direction (-1 = up, 1 = down). Anything else means no movement.
    pub fn from_i8(dir: i8) -> Self {
        match dir {
            -1 => PaddleDirection::Up,
            1 => PaddleDirection::Down,
            _ => PaddleDirection::None,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            PaddleDirection::Up => -1,
            PaddleDirection::Down => 1,
            PaddleDirection::None => 0,
        }
    }

    /// Sign of the y delta (screen coordinates, y grows downward)
    pub fn sign(self) -> f32 {
        self.as_i8() as f32
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to field)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Paddle rectangle in field coordinates
    pub fn rect(&self, config: &Config) -> Aabb {
        let min = Vec2::new(config.paddle_x(self.side), self.y);
        Aabb::new(
            min,
            min + Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: PaddleDirection,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32, // Scalar speed set on serve and on each paddle hit
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
        }
    }

    /// Re-center the ball and aim it at `toward` with the given launch angle
    pub fn reset(&mut self, center: Vec2, speed: f32, angle: f32, toward: Side) {
        self.pos = center;
        self.speed = speed;
        // Moving toward a side means moving against that side's away direction
        let dir = -toward.away_sign();
        self.vel = Vec2::new(dir * angle.cos(), angle.sin()) * speed;
    }

    /// Side whose paddle the ball is travelling toward
    pub fn heading(&self) -> Side {
        if self.vel.x < 0.0 {
            Side::Player
        } else {
            Side::Computer
        }
    }
}
