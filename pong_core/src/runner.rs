use crate::{Agent, GameRng, Match, MatchError, Side};
use log::{info, warn};

/// How a driven match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The ball left the field
    Decided { winner: Side, ticks: u64 },
    /// The runner's tick cap was reached first
    TickLimit { ticks: u64 },
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Decided { winner, .. } => Some(*winner),
            Outcome::TickLimit { .. } => None,
        }
    }

    pub fn ticks(&self) -> u64 {
        match self {
            Outcome::Decided { ticks, .. } | Outcome::TickLimit { ticks } => *ticks,
        }
    }
}

/// Drives a [`Match`] to completion by asking both agents for a move each tick.
///
/// A tick cap is runner policy only; the match itself never times out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Runner {
    pub max_ticks: Option<u64>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_ticks(max_ticks: u64) -> Self {
        Self {
            max_ticks: Some(max_ticks),
        }
    }

    /// Play headless until a winner is set or the tick cap is hit
    pub fn run(
        &self,
        game: &mut Match,
        left: &dyn Agent,
        right: &dyn Agent,
        rng: &mut GameRng,
    ) -> Result<Outcome, MatchError> {
        self.run_with_observer(game, left, right, rng, |_| {})
    }

    /// Like [`Runner::run`], calling `observer` after every tick.
    ///
    /// This is the hook for presentation layers: the observer reads the
    /// match state but cannot step it.
    pub fn run_with_observer<F>(
        &self,
        game: &mut Match,
        left: &dyn Agent,
        right: &dyn Agent,
        rng: &mut GameRng,
        mut observer: F,
    ) -> Result<Outcome, MatchError>
    where
        F: FnMut(&Match),
    {
        loop {
            if let Some(winner) = game.winner() {
                return Err(MatchError::AlreadyDecided { winner });
            }

            if let Some(max_ticks) = self.max_ticks {
                if game.ticks() >= max_ticks {
                    warn!(
                        "{} vs {} stopped undecided after {} ticks",
                        game.label(Side::Left),
                        game.label(Side::Right),
                        game.ticks()
                    );
                    return Ok(Outcome::TickLimit {
                        ticks: game.ticks(),
                    });
                }
            }

            let action_left = left.decide(&game.observation(Side::Left), rng);
            let action_right = right.decide(&game.observation(Side::Right), rng);

            let winner = game.step(action_left, action_right)?;
            observer(game);

            if let Some(winner) = winner {
                info!("{} wins!", game.label(winner));
                return Ok(Outcome::Decided {
                    winner,
                    ticks: game.ticks(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ball, Config, LearnedAgent, Observation};
    use glam::Vec2;

    struct Idle;

    impl Agent for Idle {
        fn decide(&self, _observation: &Observation, _rng: &mut GameRng) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_run_until_ball_exits() {
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(100.0, 50.0), Vec2::new(-4.0, 0.0)),
        );
        let mut rng = GameRng::new(1);

        let outcome = Runner::new()
            .run(&mut game, &Idle, &Idle, &mut rng)
            .unwrap();

        // Ball passes above the left paddle and exits at x <= 0 on tick 25
        assert_eq!(
            outcome,
            Outcome::Decided {
                winner: Side::Right,
                ticks: 25
            }
        );
        assert_eq!(game.winner(), Some(Side::Right));
    }

    #[test]
    fn test_tick_cap_stops_undecided_match() {
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(320.0, 240.0), Vec2::ZERO),
        );
        let mut rng = GameRng::new(1);

        let outcome = Runner::with_max_ticks(10)
            .run(&mut game, &Idle, &Idle, &mut rng)
            .unwrap();

        assert_eq!(outcome, Outcome::TickLimit { ticks: 10 });
        assert_eq!(outcome.winner(), None);
        assert!(!game.is_decided());
    }

    #[test]
    fn test_observer_sees_every_tick() {
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(100.0, 50.0), Vec2::new(-4.0, 0.0)),
        );
        let mut rng = GameRng::new(1);
        let mut seen = Vec::new();

        let outcome = Runner::new()
            .run_with_observer(&mut game, &Idle, &Idle, &mut rng, |m| seen.push(m.ticks()))
            .unwrap();

        assert_eq!(seen.len() as u64, outcome.ticks());
        assert_eq!(seen.first(), Some(&1));
    }

    #[test]
    fn test_agents_see_their_own_side() {
        // Each agent returns its own paddle y, which is 190 at the start
        let mirror = LearnedAgent::new(|state: [f32; 4]| state[2] - 190.0 + 1.0);
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(320.0, 240.0), Vec2::ZERO),
        );
        let mut rng = GameRng::new(1);

        Runner::with_max_ticks(1)
            .run(&mut game, &mirror, &Idle, &mut rng)
            .unwrap();

        assert_eq!(game.paddle(Side::Left).y, 191.0);
        assert_eq!(game.paddle(Side::Right).y, 190.0);
    }

    #[test]
    fn test_running_a_decided_match_fails() {
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(2.0, 240.0), Vec2::new(-4.0, 0.0)),
        );
        let mut rng = GameRng::new(1);
        let runner = Runner::new();
        runner.run(&mut game, &Idle, &Idle, &mut rng).unwrap();

        let err = runner.run(&mut game, &Idle, &Idle, &mut rng).unwrap_err();
        assert_eq!(
            err,
            MatchError::AlreadyDecided {
                winner: Side::Right
            }
        );
    }

    #[test]
    fn test_capped_run_of_decided_match_fails() {
        let mut game = Match::with_ball(
            Config::new(),
            Ball::new(Vec2::new(2.0, 240.0), Vec2::new(-4.0, 0.0)),
        );
        let mut rng = GameRng::new(1);
        let runner = Runner::with_max_ticks(1);

        let first = runner.run(&mut game, &Idle, &Idle, &mut rng);
        assert_eq!(
            first,
            Ok(Outcome::Decided {
                winner: Side::Right,
                ticks: 1
            })
        );

        // The cap is reached too, but the decision takes precedence
        let second = runner.run(&mut game, &Idle, &Idle, &mut rng);
        assert_eq!(
            second,
            Err(MatchError::AlreadyDecided {
                winner: Side::Right
            })
        );
        assert_eq!(game.ticks(), 1);
    }
}
