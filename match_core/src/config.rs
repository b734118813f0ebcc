use std::fmt;

use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Match configuration. Field dimensions are fixed for the simulator's lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub computer_speed: f32,
    pub ai_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub ball_min_horizontal: f32,
    pub ball_push_out: f32,
    pub max_bounce_angle: f32,
    pub serve_delay_ms: f32,
    pub serve_gap: f32,
    pub serve_angle_max: f32,
    pub frame_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            computer_speed: Params::COMPUTER_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_min_horizontal: Params::BALL_MIN_HORIZONTAL,
            ball_push_out: Params::BALL_PUSH_OUT,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_delay_ms: Params::SERVE_DELAY_MS,
            serve_gap: Params::SERVE_GAP,
            serve_angle_max: Params::SERVE_ANGLE_MAX,
            frame_ms: Params::FRAME_MS,
        }
    }
}

/// Reasons a field cannot host a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero, negative, NaN or infinite
    InvalidDimensions { width: f32, height: f32 },
    /// Paddles would not fit vertically
    TooShort { height: f32, min: f32 },
    /// Paddles and ball would not fit side by side
    TooNarrow { width: f32, min: f32 },
    /// Nominal tick length is zero, negative, NaN or infinite
    InvalidFrame { frame_ms: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "invalid field dimensions {}x{}", width, height)
            }
            ConfigError::TooShort { height, min } => {
                write!(f, "field height {} is below the minimum of {}", height, min)
            }
            ConfigError::TooNarrow { width, min } => {
                write!(f, "field width {} is below the minimum of {}", width, min)
            }
            ConfigError::InvalidFrame { frame_ms } => {
                write!(f, "frame duration {} ms must be positive", frame_ms)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a field of the given size
    pub fn for_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Check that both paddles and the ball fit inside the field and that
    /// ticks have a positive duration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.field_width, self.field_height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }

        if height < self.paddle_height {
            return Err(ConfigError::TooShort {
                height,
                min: self.paddle_height,
            });
        }

        let min_width = 2.0 * (self.paddle_margin + self.paddle_width + self.ball_radius);
        if width < min_width {
            return Err(ConfigError::TooNarrow {
                width,
                min: min_width,
            });
        }

        if !self.frame_ms.is_finite() || self.frame_ms <= 0.0 {
            return Err(ConfigError::InvalidFrame {
                frame_ms: self.frame_ms,
            });
        }

        Ok(())
    }

    /// Get the fixed X position (left edge) of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Computer => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Movement per tick for a paddle
    pub fn paddle_speed_for(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_speed,
            Side::Computer => self.computer_speed,
        }
    }

    /// Clamp a paddle's top edge to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Clamp a paddle's vertical center to field bounds.
    ///
    /// On a field shorter than a paddle every center collapses to the top position.
    pub fn clamp_paddle_center(&self, center_y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        center_y
            .min(self.field_height - half_height)
            .max(half_height)
    }

    /// Lowest legal top edge for a paddle
    pub fn max_paddle_y(&self) -> f32 {
        (self.field_height - self.paddle_height).max(0.0)
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_rest_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Duration of one nominal tick in milliseconds
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 12.0, "Player paddle X position");
        assert_eq!(
            config.paddle_x(Side::Computer),
            776.0,
            "Computer paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-20.0), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0), 390.0);
        assert_eq!(config.clamp_paddle_y(120.0), 120.0);
    }

    #[test]
    fn test_config_clamp_paddle_center() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_center(-5.0), 55.0);
        assert_eq!(config.clamp_paddle_center(600.0), 445.0);
        assert_eq!(config.clamp_paddle_center(250.0), 250.0);
    }

    #[test]
    fn test_config_rest_and_center() {
        let config = Config::for_field(640.0, 480.0);
        assert_eq!(config.paddle_rest_y(), 185.0);
        assert_eq!(config.field_center(), Vec2::new(320.0, 240.0));
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_config_validate_accepts_default() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_validate_rejects_bad_fields() {
        assert!(matches!(
            Config::for_field(f32::NAN, 500.0).validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Config::for_field(800.0, 0.0).validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Config::for_field(800.0, 100.0).validate(),
            Err(ConfigError::TooShort { .. })
        ));
        assert!(matches!(
            Config::for_field(60.0, 500.0).validate(),
            Err(ConfigError::TooNarrow { .. })
        ));
    }

    #[test]
    fn test_config_validate_rejects_bad_frame() {
        for frame_ms in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let config = Config {
                frame_ms,
                ..Config::new()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidFrame { .. })),
                "frame_ms {} should be rejected",
                frame_ms
            );
        }
    }

    #[test]
    fn test_short_field_clamps_without_panicking() {
        let config = Config::for_field(800.0, 100.0);
        assert_eq!(config.clamp_paddle_center(50.0), 55.0);
        assert_eq!(config.clamp_paddle_center(-50.0), 55.0);
        assert_eq!(config.clamp_paddle_y(30.0), 0.0);
        assert_eq!(config.paddle_rest_y(), 0.0);
    }

    #[test]
    fn test_config_error_display() {
        let err = Config::for_field(800.0, 100.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "field height 100 is below the minimum of 110"
        );
    }
}
