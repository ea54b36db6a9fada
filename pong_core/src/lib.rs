//! Deterministic Pong simulation for pitting paddle agents against each other.
//!
//! A [`Match`] owns the ball and both paddles and advances them one tick per
//! [`Match::step`]. [`build_matches`] pairs a roster round-robin and
//! [`Runner`] drives matches to completion, headless or with an observer.

pub mod agent;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod resources;
pub mod runner;
pub mod scheduler;
pub mod systems;

pub use agent::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use runner::*;
pub use scheduler::*;

use hecs::World;
use systems::*;

/// Advance the world by one tick and report the winner, if any.
///
/// `actions` holds the commanded paddle velocities indexed by [`Side::index`].
pub fn step(
    world: &mut World,
    config: &Config,
    actions: [f32; 2],
    ticks: &mut u64,
    events: &mut Events,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Agent commands become paddle velocities
    apply_actions(world, actions);

    // 2. Integrate paddles and ball
    move_paddles(world, config);
    move_ball(world, config, events);

    // 3. Elapsed time scales the paddle bounce bonus
    *ticks += 1;

    // 4. Ball vs paddles
    check_paddle_collisions(world, config, *ticks, events);

    // 5. Ball exited the field
    check_scoring(world, config, events)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
