use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, find_ball, find_paddle, place_paddle_center, reset_ball,
    set_paddle_intent, step, Ball, Config, Events, GameRng, KeySignal, KeyState, Paddle,
    PaddleDirection, Score, ServeRng, ServeState, Side,
};

/// Paddle rectangle as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Ball circle as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

/// Read-only view of the match for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub player: PaddleView,
    pub computer: PaddleView,
    pub ball: BallView,
    pub score: Score,
    pub serving: bool,
}

/// A single match between the human player and the computer.
///
/// Owns every piece of game state. Renderers read [`Snapshot`]s, input
/// sources call the `set_*`/`key_signal` methods, and an external frame loop
/// calls [`MatchSimulator::update`] once per frame.
pub struct MatchSimulator<R: ServeRng = GameRng> {
    world: World,
    config: Config,
    score: Score,
    serve: ServeState,
    events: Events,
    keys: KeyState,
    rng: R,
    tick: u64,
}

impl MatchSimulator<GameRng> {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, GameRng::default())
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: ServeRng> MatchSimulator<R> {
    /// Build a match with an injected serve random source and make the opening serve.
    ///
    /// `config` is expected to have passed [`Config::validate`]. Other configs
    /// never panic, but paddles may not fit the field.
    pub fn with_rng(config: Config, rng: R) -> Self {
        let mut world = World::new();

        // Create paddles
        let rest_y = config.paddle_rest_y();
        create_paddle(&mut world, Side::Player, rest_y);
        create_paddle(&mut world, Side::Computer, rest_y);

        // Create ball
        create_ball(&mut world, config.field_center(), Vec2::ZERO);

        log::info!(
            "Match created on a {}x{} field",
            config.field_width,
            config.field_height
        );

        let mut sim = Self {
            world,
            config,
            score: Score::new(),
            serve: ServeState::new(),
            events: Events::new(),
            keys: KeyState::new(),
            rng,
            tick: 0,
        };
        let toward_player = sim.rng.coin_flip();
        sim.reset_ball(toward_player);
        sim
    }

    /// Record the player's paddle direction for the next tick
    pub fn set_player_input(&mut self, dir: PaddleDirection) {
        set_paddle_intent(&mut self.world, Side::Player, dir);
    }

    /// Feed a discrete key signal; held keys decide the paddle direction
    pub fn key_signal(&mut self, signal: KeySignal) {
        self.keys.apply(signal);
        self.set_player_input(self.keys.direction());
    }

    /// Pointer-follow mode: center the player paddle on `y` right away
    pub fn set_player_target_y(&mut self, y: f32) {
        place_paddle_center(&mut self.world, &self.config, Side::Player, y);
    }

    /// Advance one tick of one nominal frame
    pub fn update(&mut self) {
        self.update_elapsed(self.config.frame_ms());
    }

    /// Advance one tick, counting `elapsed_ms` of wall-clock time toward the serve delay
    pub fn update_elapsed(&mut self, elapsed_ms: f32) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.serve,
            &mut self.events,
            &mut self.rng,
            elapsed_ms,
        );
        self.tick += 1;
    }

    /// Re-center the ball and start a serve toward the given side
    pub fn reset_ball(&mut self, toward_player: bool) {
        let toward = if toward_player {
            Side::Player
        } else {
            Side::Computer
        };
        reset_ball(
            &mut self.world,
            &self.config,
            &mut self.serve,
            &mut self.rng,
            toward,
        );
    }

    /// Zero the score, recenter paddles and serve toward a random side
    pub fn restart(&mut self) {
        self.score.reset();
        let rest_y = self.config.paddle_rest_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = rest_y;
        }

        let toward_player = self.rng.coin_flip();
        self.reset_ball(toward_player);
        log::info!("Match restarted");
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        Snapshot {
            tick: self.tick,
            player: self.paddle_view(Side::Player),
            computer: self.paddle_view(Side::Computer),
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                r: self.config.ball_radius,
            },
            score: self.score,
            serving: self.serve.is_serving,
        }
    }

    pub fn ball(&self) -> Ball {
        find_ball(&self.world).unwrap_or_else(|| Ball::new(self.config.field_center(), Vec2::ZERO))
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        find_paddle(&self.world, side)
            .unwrap_or_else(|| Paddle::new(side, self.config.paddle_rest_y()))
    }

    fn paddle_view(&self, side: Side) -> PaddleView {
        let paddle = self.paddle(side);
        PaddleView {
            x: self.config.paddle_x(side),
            y: paddle.y,
            w: self.config.paddle_width,
            h: self.config.paddle_height,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_serving(&self) -> bool {
        self.serve.is_serving
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Direct access to the world, for tests that stage positions
    #[doc(hidden)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Leave serving immediately, as if the serve delay had elapsed
    #[doc(hidden)]
    pub fn end_serve(&mut self) {
        self.serve.timer.cancel();
        self.serve.is_serving = false;
    }
}
