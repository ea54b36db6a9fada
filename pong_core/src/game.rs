use crate::{
    create_ball, create_paddle, Ball, Config, Events, GameRng, MatchError, Observation, Paddle,
    Side,
};
use hecs::World;
use log::{debug, trace};

/// Positions and velocities of every entity after the last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball: Ball,
    pub paddles: [Paddle; 2], // indexed by Side::index
}

impl Snapshot {
    fn capture(world: &World) -> Result<Self, MatchError> {
        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .ok_or(MatchError::MissingEntity("ball"))?;

        let mut left = None;
        let mut right = None;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = Some(*paddle),
                Side::Right => right = Some(*paddle),
            }
        }

        Ok(Self {
            ball,
            paddles: [
                left.ok_or(MatchError::MissingEntity("left paddle"))?,
                right.ok_or(MatchError::MissingEntity("right paddle"))?,
            ],
        })
    }
}

/// One game between two paddles, ending when the ball leaves a side.
///
/// The winner is set once and never changes. Stepping a decided match fails
/// with [`MatchError::AlreadyDecided`] and leaves the state untouched.
pub struct Match {
    world: World,
    config: Config,
    labels: [String; 2],
    snapshot: Snapshot,
    winner: Option<Side>,
    ticks: u64,
    events: Events,
}

impl Match {
    /// Start a match with the ball served from the centre in a random direction
    pub fn new(config: Config, rng: &mut GameRng) -> Self {
        let ball = Ball::serve(&config, rng);
        debug!("serving ball with velocity {}", ball.vel);
        Self::with_ball(config, ball)
    }

    /// Start a match with an explicit ball state and centred paddles
    pub fn with_ball(config: Config, ball: Ball) -> Self {
        let mut world = World::new();
        let left = Paddle::new(Side::Left, &config);
        let right = Paddle::new(Side::Right, &config);
        create_paddle(&mut world, left);
        create_paddle(&mut world, right);
        create_ball(&mut world, ball);

        Self {
            world,
            config,
            labels: ["Player 1".to_string(), "Player 2".to_string()],
            snapshot: Snapshot {
                ball,
                paddles: [left, right],
            },
            winner: None,
            ticks: 0,
            events: Events::new(),
        }
    }

    /// Name the left and right players for reporting
    pub fn with_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.labels = [left.into(), right.into()];
        self
    }

    /// Advance one tick with the commanded paddle velocities.
    ///
    /// Returns the winning side once the ball has left the field.
    pub fn step(
        &mut self,
        action_left: f32,
        action_right: f32,
    ) -> Result<Option<Side>, MatchError> {
        if let Some(winner) = self.winner {
            return Err(MatchError::AlreadyDecided { winner });
        }

        let winner = crate::step(
            &mut self.world,
            &self.config,
            [action_left, action_right],
            &mut self.ticks,
            &mut self.events,
        );
        self.snapshot = Snapshot::capture(&self.world)?;

        trace!(
            "tick {}: ball {} vel {}, paddles {} / {}",
            self.ticks,
            self.snapshot.ball.pos,
            self.snapshot.ball.vel,
            self.snapshot.paddles[0].y,
            self.snapshot.paddles[1].y
        );

        if let Some(side) = winner {
            debug!(
                "match decided after {} ticks: {} ({})",
                self.ticks,
                self.label(side),
                side
            );
            self.winner = Some(side);
        }
        Ok(winner)
    }

    pub fn ball(&self) -> Ball {
        self.snapshot.ball
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.snapshot.paddles[side.index()]
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn label(&self, side: Side) -> &str {
        &self.labels[side.index()]
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn winner_label(&self) -> Option<&str> {
        self.winner.map(|side| self.label(side))
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Ticks stepped so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Events of the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// State as seen by the agent playing `side`
    pub fn observation(&self, side: Side) -> Observation {
        Observation {
            ball: self.snapshot.ball.pos,
            own_y: self.paddle(side).y,
            opponent_y: self.paddle(side.opponent()).y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn still_ball_match() -> Match {
        Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(320.0, 240.0), Vec2::ZERO),
        )
    }

    #[test]
    fn test_new_match_starts_undecided() {
        let mut rng = GameRng::new(5);
        let game = Match::new(Config::new(), &mut rng);
        assert_eq!(game.winner(), None);
        assert_eq!(game.ticks(), 0);
        assert_eq!(game.ball().pos, Vec2::new(320.0, 240.0));
        assert_eq!(game.paddle(Side::Left).y, 190.0);
        assert_eq!(game.paddle(Side::Right).y, 190.0);
        assert_eq!(game.label(Side::Left), "Player 1");
        assert_eq!(game.label(Side::Right), "Player 2");
    }

    #[test]
    fn test_step_sets_paddle_velocities() {
        let mut game = still_ball_match();
        game.step(-5.0, 5.0).unwrap();
        assert_eq!(game.paddle(Side::Left).vy, -5.0);
        assert_eq!(game.paddle(Side::Right).vy, 5.0);
        assert_eq!(game.paddle(Side::Left).y, 185.0);
        assert_eq!(game.paddle(Side::Right).y, 195.0);
    }

    #[test]
    fn test_step_counts_ticks() {
        let mut game = still_ball_match();
        for _ in 0..7 {
            game.step(0.0, 0.0).unwrap();
        }
        assert_eq!(game.ticks(), 7);
    }

    #[test]
    fn test_large_actions_are_not_limited() {
        let mut game = still_ball_match();
        game.step(-150.0, 0.0).unwrap();
        assert_eq!(game.paddle(Side::Left).vy, -150.0);
        assert_eq!(game.paddle(Side::Left).y, 0.0, "Position is still clamped");
    }

    #[test]
    fn test_observation_is_side_relative() {
        let mut game = still_ball_match();
        game.step(-10.0, 10.0).unwrap();
        let left = game.observation(Side::Left);
        let right = game.observation(Side::Right);
        assert_eq!(left.own_y, 180.0);
        assert_eq!(left.opponent_y, 200.0);
        assert_eq!(right.own_y, 200.0);
        assert_eq!(right.opponent_y, 180.0);
        assert_eq!(left.ball, right.ball);
    }

    #[test]
    fn test_step_after_decision_fails() {
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(2.0, 240.0), Vec2::new(-4.0, 0.0)),
        )
        .with_labels("alpha", "beta");

        assert_eq!(game.step(0.0, 0.0), Ok(Some(Side::Right)));
        assert_eq!(game.winner_label(), Some("beta"));

        let before = *game.snapshot();
        assert_eq!(
            game.step(5.0, 5.0),
            Err(MatchError::AlreadyDecided {
                winner: Side::Right
            })
        );
        assert_eq!(*game.snapshot(), before, "State must not change");
        assert_eq!(game.ticks(), 1);
        assert_eq!(game.winner(), Some(Side::Right));
    }

    #[test]
    fn test_events_reflect_last_tick() {
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(320.0, 1.0), Vec2::new(0.0, -2.0)),
        );
        game.step(0.0, 0.0).unwrap();
        assert!(game.events().ball_hit_wall);

        game.step(0.0, 0.0).unwrap();
        assert!(!game.events().ball_hit_wall, "Events are cleared each tick");
    }

    #[test]
    fn test_match_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Match>();
    }
}
