use crate::{Ball, Config, Events, Side};
use hecs::World;

/// Check if the ball left the field, returning the winning side.
///
/// The ball exits past the paddle that failed to block it, so leaving on the
/// left means the right paddle wins and vice versa.
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events) -> Option<Side> {
    let mut winner = None;
    for (_entity, ball) in world.query_mut::<&Ball>() {
        if ball.pos.x <= 0.0 {
            events.ball_exited = Some(Side::Left);
            winner = Some(Side::Right);
        } else if ball.pos.x >= config.right_goal_x() {
            events.ball_exited = Some(Side::Right);
            winner = Some(Side::Left);
        }
    }
    winner
}
