/// Game tuning parameters for the match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    pub const PADDLE_SPEED: f32 = 6.0; // units per tick
    pub const PADDLE_MARGIN: f32 = 12.0; // gap between field edge and paddle
    pub const COMPUTER_SPEED: f32 = 4.2; // fixed difficulty
    pub const AI_DEAD_ZONE: f32 = 6.0;

    // Ball
    pub const BALL_RADIUS: f32 = 9.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 12.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_MIN_HORIZONTAL: f32 = 2.0;
    pub const BALL_PUSH_OUT: f32 = 0.5; // Clearance after a paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60°

    // Serve
    pub const SERVE_DELAY_MS: f32 = 600.0;
    pub const SERVE_GAP: f32 = 6.0; // Pinned ball distance from the serving paddle
    pub const SERVE_ANGLE_MAX: f32 = std::f32::consts::FRAC_PI_8; // ±22.5°

    // Timing
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
}
