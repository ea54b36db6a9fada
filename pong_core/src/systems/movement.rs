use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Apply paddle movement from the velocities set this tick
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance(config);
    }
}

/// Move ball based on velocity, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(config) {
            events.ball_hit_wall = true;
        }
    }
}
