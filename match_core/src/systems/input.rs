use hecs::World;

use crate::{Config, Paddle, PaddleDirection, PaddleIntent, Side};

/// Record the movement intent for one side's paddle
pub fn set_paddle_intent(world: &mut World, side: Side, dir: PaddleDirection) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.dir = dir;
        }
    }
}

/// Move a paddle so its vertical center sits at `center_y`, clamped to the field.
///
/// Takes effect immediately rather than on the next tick. Non-finite
/// coordinates are ignored and leave the paddle where it is.
pub fn place_paddle_center(world: &mut World, config: &Config, side: Side, center_y: f32) {
    if !center_y.is_finite() {
        return;
    }
    let center = config.clamp_paddle_center(center_y);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.y = config.clamp_paddle_y(center - config.paddle_height / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, find_paddle};

    #[test]
    fn test_set_intent_targets_one_side() {
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, 0.0);
        create_paddle(&mut world, Side::Computer, 0.0);

        set_paddle_intent(&mut world, Side::Player, PaddleDirection::Down);

        for (_e, (paddle, intent)) in world.query::<(&Paddle, &PaddleIntent)>().iter() {
            match paddle.side {
                Side::Player => assert_eq!(intent.dir, PaddleDirection::Down),
                Side::Computer => assert_eq!(intent.dir, PaddleDirection::None),
            }
        }
    }

    #[test]
    fn test_place_paddle_center() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 0.0);

        place_paddle_center(&mut world, &config, Side::Player, 300.0);
        assert_eq!(find_paddle(&world, Side::Player).map(|p| p.y), Some(245.0));

        // Pointer outside the field is clamped, never rejected
        place_paddle_center(&mut world, &config, Side::Player, -80.0);
        assert_eq!(find_paddle(&world, Side::Player).map(|p| p.y), Some(0.0));

        place_paddle_center(&mut world, &config, Side::Player, 9000.0);
        assert_eq!(
            find_paddle(&world, Side::Player).map(|p| p.y),
            Some(config.max_paddle_y())
        );
    }

    #[test]
    fn test_non_finite_center_is_ignored() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 120.0);

        for center_y in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            place_paddle_center(&mut world, &config, Side::Player, center_y);
            assert_eq!(find_paddle(&world, Side::Player).map(|p| p.y), Some(120.0));
        }
    }
}
