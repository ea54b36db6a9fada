use crate::{Agent, Config, GameRng, Match, MatchError, Outcome, Runner};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A named agent on the roster
#[derive(Clone)]
pub struct Player {
    pub label: String,
    pub agent: Arc<dyn Agent>,
}

impl Player {
    pub fn new(label: impl Into<String>, agent: impl Agent + 'static) -> Self {
        Self {
            label: label.into(),
            agent: Arc::new(agent),
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player").field("label", &self.label).finish()
    }
}

/// Unordered pair of roster indices, stored as (low, high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    pub low: usize,
    pub high: usize,
}

impl PairKey {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

/// One scheduled match with its seated players and its own rng
pub struct Fixture {
    /// Roster index of the left player (the row)
    pub left: usize,
    /// Roster index of the right player (the column)
    pub right: usize,
    pub left_player: Player,
    pub right_player: Player,
    pub game: Match,
    pub rng: GameRng,
}

impl Fixture {
    /// Play this fixture to completion
    pub fn play(&mut self, runner: &Runner) -> Result<Outcome, MatchError> {
        runner.run(
            &mut self.game,
            self.left_player.agent.as_ref(),
            self.right_player.agent.as_ref(),
            &mut self.rng,
        )
    }

    /// Roster index of the winner, once decided
    pub fn winner_index(&self) -> Option<usize> {
        self.game.winner().map(|side| match side {
            crate::Side::Left => self.left,
            crate::Side::Right => self.right,
        })
    }
}

/// Round-robin set of matches, one per unordered pair of players.
///
/// Conceptually an n×n matrix filled only above the diagonal: the fixture
/// for players `a < b` lives at `(a, b)` with `a` on the left.
pub struct MatchSchedule {
    players: usize,
    fixtures: BTreeMap<PairKey, Fixture>,
}

impl MatchSchedule {
    /// Number of players on the roster
    pub fn players(&self) -> usize {
        self.players
    }

    /// Number of fixtures
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Matrix-style lookup: only the populated direction answers
    pub fn get(&self, row: usize, col: usize) -> Option<&Fixture> {
        self.fixtures
            .get(&PairKey::new(row, col))
            .filter(|fixture| fixture.left == row && fixture.right == col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Fixture> {
        self.fixtures
            .get_mut(&PairKey::new(row, col))
            .filter(|fixture| fixture.left == row && fixture.right == col)
    }

    /// Lookup by unordered pair
    pub fn pair(&self, a: usize, b: usize) -> Option<&Fixture> {
        self.fixtures.get(&PairKey::new(a, b))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &Fixture)> {
        self.fixtures.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&PairKey, &mut Fixture)> {
        self.fixtures.iter_mut()
    }

    /// Fixtures in row-major order
    pub fn into_fixtures(self) -> Vec<Fixture> {
        self.fixtures.into_values().collect()
    }
}

/// Build one match for every unordered pair of distinct players.
///
/// Pairs are visited row by row; `(row, col)` is skipped when `(col, row)`
/// already exists, so the row player always takes the left paddle. Each
/// fixture gets an rng forked from `seed` in visiting order.
pub fn build_matches(players: &[Player], config: &Config, seed: u64) -> MatchSchedule {
    let mut seeder = GameRng::new(seed);
    let mut fixtures = BTreeMap::new();

    for row in 0..players.len() {
        for col in 0..players.len() {
            if row == col {
                continue;
            }
            let key = PairKey::new(row, col);
            if fixtures.contains_key(&key) {
                continue;
            }

            let left_player = players[row].clone();
            let right_player = players[col].clone();
            let mut rng = seeder.fork();
            let game = Match::new(config.clone(), &mut rng)
                .with_labels(left_player.label.clone(), right_player.label.clone());

            debug!(
                "scheduled {} (left) vs {} (right)",
                left_player.label, right_player.label
            );
            fixtures.insert(
                key,
                Fixture {
                    left: row,
                    right: col,
                    left_player,
                    right_player,
                    game,
                    rng,
                },
            );
        }
    }

    MatchSchedule {
        players: players.len(),
        fixtures,
    }
}
