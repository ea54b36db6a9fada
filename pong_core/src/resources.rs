use crate::Side;

/// Random number generator owned by a single match
///
/// The serve direction and random agents draw from it, so a seed fixes a run.
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Derive an independent generator, e.g. one per scheduled match
    pub fn fork(&mut self) -> Self {
        use rand::Rng;
        Self::new(self.0.gen())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    pub ball_exited: Option<Side>, // side the ball left through
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = None;
        self.ball_hit_wall = false;
        self.ball_exited = None;
    }
}
