use crate::{find_paddle, Ball, Config, ServeRng, ServeState, Side};
use hecs::World;

/// Keep a serving ball pinned next to the paddle it will launch from.
///
/// The serving paddle is the one the stored velocity points at.
pub fn hold_served_ball(world: &mut World, config: &Config) {
    let player = find_paddle(world, Side::Player);
    let computer = find_paddle(world, Side::Computer);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let server = ball.heading();
        let paddle = match server {
            Side::Player => player,
            Side::Computer => computer,
        };
        let Some(paddle) = paddle else {
            continue;
        };

        ball.pos.x = serve_x(config, server);
        ball.pos.y = paddle.center_y(config);
    }
}

/// X position of a ball held by `server`'s paddle
pub fn serve_x(config: &Config, server: Side) -> f32 {
    let offset = config.ball_radius + config.serve_gap;
    match server {
        Side::Player => config.paddle_x(Side::Player) + config.paddle_width + offset,
        Side::Computer => config.paddle_x(Side::Computer) - offset,
    }
}

/// Re-center the ball, aim it at `toward` and start a new serve.
///
/// Any serve-end still pending from an earlier serve is cancelled.
pub fn reset_ball<R: ServeRng + ?Sized>(
    world: &mut World,
    config: &Config,
    serve: &mut ServeState,
    rng: &mut R,
    toward: Side,
) {
    let angle = rng.serve_angle(config.serve_angle_max);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(
            config.field_center(),
            config.ball_speed_initial,
            angle,
            toward,
        );
    }

    serve.begin(config.serve_delay_ms);
    log::debug!(
        "Serve toward {:?} at {:.1} degrees",
        toward,
        angle.to_degrees()
    );
}
