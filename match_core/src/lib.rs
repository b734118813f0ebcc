pub mod components;
pub mod config;
pub mod field;
pub mod keys;
pub mod params;
pub mod resources;
pub mod simulator;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use keys::*;
pub use params::*;
pub use resources::*;
pub use simulator::*;
pub use systems::*;

use hecs::World;

/// Run one fixed simulation tick.
///
/// `elapsed_ms` only drives the serve delay; paddles and ball always advance
/// by one fixed step.
#[allow(clippy::too_many_arguments)]
pub fn step<R: ServeRng + ?Sized>(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    serve: &mut ServeState,
    events: &mut Events,
    rng: &mut R,
    elapsed_ms: f32,
) {
    // Clear events at start of tick
    events.clear();

    // 0. Pending serve-end fires before anything moves
    if serve.update(elapsed_ms) {
        events.serve_ended = true;
        log::debug!("Serve ended, ball in play");
    }

    // 1. Computer picks a direction from the ball position
    steer_computer(world, config);

    // 2. Move paddles based on intents
    move_paddles(world, config);

    // 3. Serving ball follows its paddle and nothing else happens
    if serve.is_serving {
        hold_served_ball(world, config);
        return;
    }

    // 4. Move ball
    move_ball(world);

    // 5. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 6. Check scoring (ball left the field)
    check_scoring(world, config, score, serve, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Copy of the ball, if one exists
pub fn find_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Copy of one side's paddle, if it exists
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, paddle)| paddle.side == side)
        .map(|(_e, paddle)| *paddle)
}
