use crate::Paddle;
use hecs::World;

/// Overwrite each paddle's velocity with its agent's command for this tick.
///
/// `actions` is indexed by [`crate::Side::index`]. Magnitudes are taken as given.
pub fn apply_actions(world: &mut World, actions: [f32; 2]) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.vy = actions[paddle.side.index()];
    }
}
