use crate::{find_ball, reset_ball, Config, Events, Score, ServeRng, ServeState, Side};
use hecs::World;

/// Check if the ball left the field (scoring)
///
/// At most one side scores per tick. The conceding side receives the next serve.
pub fn check_scoring<R: ServeRng + ?Sized>(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    serve: &mut ServeState,
    events: &mut Events,
    rng: &mut R,
) -> Option<Side> {
    let ball = find_ball(world)?;

    let scorer = if ball.pos.x - config.ball_radius <= 0.0 {
        Side::Computer
    } else if ball.pos.x + config.ball_radius >= config.field_width {
        Side::Player
    } else {
        return None;
    };

    score.increment(scorer);
    match scorer {
        Side::Player => events.player_scored = true,
        Side::Computer => events.computer_scored = true,
    }
    log::debug!(
        "{:?} scores ({} - {})",
        scorer,
        score.player,
        score.computer
    );

    reset_ball(world, config, serve, rng, scorer.opponent());
    Some(scorer)
}
