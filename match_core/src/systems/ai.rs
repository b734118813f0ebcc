use crate::{find_ball, Config, Paddle, PaddleDirection, PaddleIntent, Side};
use hecs::World;

/// Set the computer paddle's intent so it follows the ball
///
/// Strategy: chase the ball's vertical center at the computer's fixed speed,
/// holding still while within the dead zone so the paddle does not jitter.
pub fn steer_computer(world: &mut World, config: &Config) {
    let ball_y = match find_ball(world) {
        Some(ball) => ball.pos.y,
        None => return,
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Computer {
            intent.dir = follow_direction(paddle.center_y(config), ball_y, config.ai_dead_zone);
        }
    }
}

/// Direction that brings `center` toward `target`, or none inside the dead zone
pub fn follow_direction(center: f32, target: f32, dead_zone: f32) -> PaddleDirection {
    if center < target - dead_zone {
        PaddleDirection::Down
    } else if center > target + dead_zone {
        PaddleDirection::Up
    } else {
        PaddleDirection::None
    }
}
