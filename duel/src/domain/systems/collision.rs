use crate::domain::state::{Player, Projectile};
use crate::domain::tuning::projectile::ProjectileTuning;
use tracing::{debug, info};

/// Discrete point-vs-rectangle hit test.
///
/// The projectile point is grown by `radius` on every side and compared against the
/// player's hitbox, inclusive on all four edges. There is no swept test, so a
/// projectile that moves farther than a hitbox's narrow side in one tick can pass
/// through it.
pub fn collides(proj: &Projectile, target: &Player, radius: f32) -> bool {
    proj.x >= target.x - radius
        && proj.x <= target.x + target.width + radius
        && proj.y >= target.y - radius
        && proj.y <= target.y + target.height + radius
}

/// Resolves every projectile owned by `shooter` against `target`.
///
/// Each hit removes the projectile from the shooter's list and deducts damage from
/// the target, saturating at zero. Returns the number of hits scored this pass.
pub fn resolve_hits(shooter: &mut Player, target: &mut Player, cfg: &ProjectileTuning) -> u32 {
    let mut hits = 0;
    let was_defeated = target.is_defeated();

    shooter.projectiles.retain(|proj| {
        if !collides(proj, target, cfg.radius) {
            return true;
        }

        target.apply_damage(cfg.damage);
        hits += 1;
        debug!(
            shooter = proj.owner.number(),
            victim = target.slot.number(),
            victim_health = target.health,
            "player hit"
        );
        false
    });

    if !was_defeated && target.is_defeated() {
        info!(
            victim = target.slot.number(),
            shooter = shooter.slot.number(),
            "player defeated"
        );
    }

    hits
}
