use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents, one fixed step per tick
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.y += intent.dir.sign() * config.paddle_speed_for(paddle.side);

        // Clamp to field bounds
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        create_ball, create_paddle, find_ball, find_paddle, set_paddle_intent, PaddleDirection,
        Side,
    };
    use glam::Vec2;

    #[test]
    fn test_player_paddle_moves_by_speed() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 200.0);

        set_paddle_intent(&mut world, Side::Player, PaddleDirection::Up);
        move_paddles(&mut world, &config);
        assert_eq!(find_paddle(&world, Side::Player).map(|p| p.y), Some(194.0));

        set_paddle_intent(&mut world, Side::Player, PaddleDirection::Down);
        move_paddles(&mut world, &config);
        move_paddles(&mut world, &config);
        assert_eq!(find_paddle(&world, Side::Player).map(|p| p.y), Some(206.0));
    }

    #[test]
    fn test_computer_paddle_uses_its_own_speed() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Computer, 100.0);

        set_paddle_intent(&mut world, Side::Computer, PaddleDirection::Down);
        move_paddles(&mut world, &config);

        let y = find_paddle(&world, Side::Computer).map(|p| p.y).unwrap_or_default();
        assert!((y - 104.2).abs() < 1e-4, "Expected 104.2, got {}", y);
    }

    #[test]
    fn test_paddle_clamped_at_edges() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 3.0);
        create_paddle(&mut world, Side::Computer, config.max_paddle_y() - 1.0);

        set_paddle_intent(&mut world, Side::Player, PaddleDirection::Up);
        set_paddle_intent(&mut world, Side::Computer, PaddleDirection::Down);
        move_paddles(&mut world, &config);

        assert_eq!(find_paddle(&world, Side::Player).map(|p| p.y), Some(0.0));
        assert_eq!(
            find_paddle(&world, Side::Computer).map(|p| p.y),
            Some(config.max_paddle_y())
        );
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(-5.0, 2.0));

        move_ball(&mut world);

        assert_eq!(find_ball(&world).map(|b| b.pos), Some(Vec2::new(395.0, 252.0)));
    }
}
