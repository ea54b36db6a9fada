use crate::{Config, GameRng, Params};
use glam::Vec2;
use rand::seq::SliceRandom;

/// What an agent sees before choosing its paddle velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub ball: Vec2,
    pub own_y: f32,
    pub opponent_y: f32,
}

impl Observation {
    /// Flat state vector `[ball x, ball y, own paddle y, opponent paddle y]`
    pub fn to_state(&self) -> [f32; 4] {
        [self.ball.x, self.ball.y, self.own_y, self.opponent_y]
    }
}

/// Decision function controlling one paddle.
///
/// Agents hold no per-match state. Any randomness comes from the rng of the
/// match being played, so one agent can sit in many matches at once.
pub trait Agent: Send + Sync {
    fn decide(&self, observation: &Observation, rng: &mut GameRng) -> f32;
}

/// Uniform random choice among a fixed set of velocities
#[derive(Debug, Clone, PartialEq)]
pub struct RandomAgent {
    actions: Vec<f32>,
}

impl RandomAgent {
    pub fn new(actions: Vec<f32>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[f32] {
        &self.actions
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(Params::RANDOM_ACTIONS.to_vec())
    }
}

impl Agent for RandomAgent {
    fn decide(&self, _observation: &Observation, rng: &mut GameRng) -> f32 {
        // An empty action set keeps the paddle still
        self.actions.choose(&mut rng.0).copied().unwrap_or(0.0)
    }
}

/// Externally supplied model mapping a state vector to a paddle velocity
pub trait Predictor: Send + Sync {
    fn predict(&self, state: [f32; 4]) -> f32;
}

impl<F> Predictor for F
where
    F: Fn([f32; 4]) -> f32 + Send + Sync,
{
    fn predict(&self, state: [f32; 4]) -> f32 {
        self(state)
    }
}

/// Agent backed by a [`Predictor`]
#[derive(Debug, Clone)]
pub struct LearnedAgent<P> {
    predictor: P,
}

impl<P: Predictor> LearnedAgent<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }
}

impl<P: Predictor> Agent for LearnedAgent<P> {
    fn decide(&self, observation: &Observation, _rng: &mut GameRng) -> f32 {
        self.predictor.predict(observation.to_state())
    }
}

/// Baseline opponent that keeps the paddle centre level with the ball
///
/// Strategy:
/// 1. Compare the ball's centre with the paddle's centre.
/// 2. Move at full speed toward the ball when outside the dead zone.
/// 3. Hold still inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingAgent {
    pub speed: f32,
    pub dead_zone: f32,
    paddle_half_height: f32,
    ball_half_size: f32,
}

impl TrackingAgent {
    pub fn new(config: &Config) -> Self {
        Self {
            speed: Params::TRACKING_SPEED,
            dead_zone: Params::TRACKING_DEAD_ZONE,
            paddle_half_height: config.paddle_height / 2.0,
            ball_half_size: config.ball_size / 2.0,
        }
    }
}

impl Agent for TrackingAgent {
    fn decide(&self, observation: &Observation, _rng: &mut GameRng) -> f32 {
        let target = observation.ball.y + self.ball_half_size;
        let centre = observation.own_y + self.paddle_half_height;
        let diff = target - centre;

        if diff > self.dead_zone {
            self.speed
        } else if diff < -self.dead_zone {
            -self.speed
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(ball_y: f32, own_y: f32) -> Observation {
        Observation {
            ball: Vec2::new(320.0, ball_y),
            own_y,
            opponent_y: 190.0,
        }
    }

    #[test]
    fn test_observation_state_order() {
        let obs = Observation {
            ball: Vec2::new(1.0, 2.0),
            own_y: 3.0,
            opponent_y: 4.0,
        };
        assert_eq!(obs.to_state(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_random_agent_picks_from_action_set() {
        let agent = RandomAgent::default();
        assert_eq!(agent.actions(), &Params::RANDOM_ACTIONS[..]);
        let mut rng = GameRng::new(3);
        let obs = observation(240.0, 190.0);
        for _ in 0..100 {
            let action = agent.decide(&obs, &mut rng);
            assert!(
                Params::RANDOM_ACTIONS.contains(&action),
                "Unexpected action {action}"
            );
        }
    }

    #[test]
    fn test_random_agent_uses_every_action() {
        let agent = RandomAgent::default();
        let mut rng = GameRng::new(11);
        let obs = observation(240.0, 190.0);
        let drawn: Vec<f32> = (0..300).map(|_| agent.decide(&obs, &mut rng)).collect();
        for action in Params::RANDOM_ACTIONS {
            assert!(drawn.contains(&action), "Action {action} never drawn");
        }
    }

    #[test]
    fn test_random_agent_with_no_actions_stays_still() {
        let agent = RandomAgent::new(Vec::new());
        let mut rng = GameRng::new(1);
        assert_eq!(agent.decide(&observation(0.0, 0.0), &mut rng), 0.0);
    }

    #[test]
    fn test_learned_agent_passes_state_to_predictor() {
        let agent = LearnedAgent::new(|state: [f32; 4]| state[1] - state[2]);
        let mut rng = GameRng::new(1);
        let obs = observation(250.0, 190.0);
        assert_eq!(agent.decide(&obs, &mut rng), 60.0);
    }

    struct Constant(f32);

    impl Predictor for Constant {
        fn predict(&self, _state: [f32; 4]) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_learned_agent_with_custom_predictor() {
        let agent = LearnedAgent::new(Constant(-2.5));
        assert_eq!(agent.predictor().0, -2.5);
        let mut rng = GameRng::new(1);
        assert_eq!(agent.decide(&observation(0.0, 0.0), &mut rng), -2.5);
    }

    #[test]
    fn test_tracking_agent_follows_ball() {
        let agent = TrackingAgent::new(&Config::new());
        assert_eq!(agent.speed, Params::TRACKING_SPEED);
        assert_eq!(agent.dead_zone, Params::TRACKING_DEAD_ZONE);
        let mut rng = GameRng::new(1);
        // Paddle centre at 240
        assert_eq!(agent.decide(&observation(400.0, 190.0), &mut rng), 5.0);
        assert_eq!(agent.decide(&observation(50.0, 190.0), &mut rng), -5.0);
        assert_eq!(agent.decide(&observation(235.0, 190.0), &mut rng), 0.0);
    }
}
