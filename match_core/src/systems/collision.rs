use crate::{find_ball, Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // First, copy ball and paddle data without holding borrows
    let mut ball = match find_ball(world) {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    // Player paddle is resolved first
    paddles.sort_by_key(|p| p.side != Side::Player);

    if bounce_off_walls(&mut ball, config) {
        events.ball_hit_wall = true;
        log::trace!("Wall bounce at {:?}", ball.pos);
    }

    for paddle in &paddles {
        if bounce_off_paddle(&mut ball, paddle, config) {
            events.ball_hit_paddle = Some(paddle.side);
            log::trace!("{:?} paddle hit, speed {:.2}", paddle.side, ball.speed);
        }
    }

    // Update ball
    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}

/// Reflect off the top and bottom walls. Returns true on a bounce.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let radius = config.ball_radius;
    if ball.pos.y - radius <= 0.0 {
        ball.pos.y = radius;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + radius >= config.field_height {
        ball.pos.y = config.field_height - radius;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Bounce the ball off a paddle if they overlap. Returns true on a hit.
///
/// The outgoing angle depends on where the ball struck: the paddle center
/// sends it straight back, the ends deflect it by up to the bounce-angle cap.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let rect = paddle.rect(config);
    let radius = config.ball_radius;
    if !rect.intersects_circle(ball.pos, radius) {
        return false;
    }

    // Push ball out of paddle so it cannot stick
    ball.pos.x = match paddle.side {
        Side::Player => rect.max.x + radius + config.ball_push_out,
        Side::Computer => rect.min.x - radius - config.ball_push_out,
    };

    let half_height = config.paddle_height / 2.0;
    let normalized = ((ball.pos.y - rect.center().y) / half_height).clamp(-1.0, 1.0);
    let bounce_angle = normalized * config.max_bounce_angle;

    let speed = (ball.vel.length() * config.ball_speed_increase).min(config.ball_speed_max);

    // Always away from the paddle, never a near-zero horizontal crawl
    let vx = (bounce_angle.cos() * speed)
        .abs()
        .max(config.ball_min_horizontal);
    ball.vel = Vec2::new(paddle.side.away_sign() * vx, bounce_angle.sin() * speed);
    ball.speed = speed;

    true
}
