use crate::domain::state::{Playfield, Player, PlayerInput};

/// Applies one tick of directional input, then clamps the hitbox inside the playfield.
///
/// Each active direction moves the full `speed` along its axis, so diagonals are
/// faster than straight lines. That is the intended arcade feel.
pub fn move_player(p: &mut Player, input: &PlayerInput, bounds: &Playfield) {
    if input.up {
        p.y -= p.speed;
    }
    if input.down {
        p.y += p.speed;
    }
    if input.left {
        p.x -= p.speed;
    }
    if input.right {
        p.x += p.speed;
    }

    clamp_to_playfield(p, bounds);
}

fn clamp_to_playfield(p: &mut Player, bounds: &Playfield) {
    // Floor the upper bound so an undersized playfield pins the hitbox at 0.
    let max_x = (bounds.width - p.width).max(0.0);
    let max_y = (bounds.height - p.height).max(0.0);

    p.x = p.x.clamp(0.0, max_x);
    p.y = p.y.clamp(0.0, max_y);
}
