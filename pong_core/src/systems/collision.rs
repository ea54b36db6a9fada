use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;
use log::debug;

/// Check ball collisions with both paddles.
///
/// On contact the horizontal velocity becomes `-vx + ball_speed_increase * ticks`.
/// The bonus is added after the reflection, so it always pushes the ball to
/// the right: it speeds up returns from the left paddle and slows returns from
/// the right one. The left paddle is checked first; the right check sees the
/// updated velocity.
pub fn check_paddle_collisions(
    world: &mut World,
    config: &Config,
    ticks: u64,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side.index());

    let bonus = config.ball_speed_increase * ticks as f32;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if touches(ball, paddle, config) {
                ball.vel.x = -ball.vel.x + bonus;
                events.ball_hit_paddle = Some(paddle.side);
                debug!(
                    "ball hit {} paddle at tick {}, vx now {}",
                    paddle.side, ticks, ball.vel.x
                );
            }
        }
    }
}

/// Strict overlap of the ball's leading edge with the paddle's box.
///
/// The left paddle tests the ball's left edge, the right paddle its right edge.
fn touches(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    let edge = match paddle.side {
        Side::Left => ball.pos.x,
        Side::Right => ball.pos.x + config.ball_size,
    };
    paddle.x < edge
        && edge < paddle.x + config.paddle_width
        && paddle.y < ball.pos.y
        && ball.pos.y < paddle.y + config.paddle_height
}
