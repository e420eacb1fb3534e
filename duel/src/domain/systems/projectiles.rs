use crate::domain::state::{Playfield, Player, Projectile};
use crate::domain::tuning::projectile::ProjectileTuning;
use tracing::debug;

/// Attempts a shot from the player's center toward `(target_x, target_y)`.
///
/// Returns true if a projectile was spawned. Nothing happens while the cooldown is
/// running, and a target sitting exactly on the firer's center is ignored without
/// resetting the cooldown.
pub fn fire(p: &mut Player, target_x: f32, target_y: f32, cfg: &ProjectileTuning) -> bool {
    if p.shoot_cooldown > 0 {
        return false;
    }

    let (cx, cy) = p.center();
    let dx = target_x - cx;
    let dy = target_y - cy;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return false;
    }

    p.projectiles.push(Projectile {
        owner: p.slot,
        x: cx,
        y: cy,
        vx: dx / distance * cfg.speed,
        vy: dy / distance * cfg.speed,
    });
    p.shoot_cooldown = cfg.cooldown_ticks;

    debug!(
        player = p.slot.number(),
        in_flight = p.projectiles.len(),
        "projectile fired"
    );
    true
}

/// Advances the player's cooldown and projectiles by one tick, dropping any
/// projectile that leaves the playfield.
pub fn tick_player(p: &mut Player, bounds: &Playfield) {
    p.shoot_cooldown = p.shoot_cooldown.saturating_sub(1);

    // Single pass: each projectile moves once and is culled on the tick it exits.
    p.projectiles.retain_mut(|proj| {
        proj.x += proj.vx;
        proj.y += proj.vy;
        bounds.contains(proj.x, proj.y)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::PlayerSlot;
    use crate::domain::tuning::player::PlayerTuning;

    fn shooter() -> Player {
        // Center sits at (120, 300).
        Player::new(PlayerSlot::One, 100.0, 270.0, &PlayerTuning::default())
    }

    fn projectile(x: f32, y: f32, vx: f32, vy: f32) -> Projectile {
        Projectile {
            owner: PlayerSlot::One,
            x,
            y,
            vx,
            vy,
        }
    }

    #[test]
    fn when_cooldown_is_ready_then_fire_spawns_one_projectile_and_resets_cooldown() {
        let cfg = ProjectileTuning::default();
        let mut p = shooter();

        let fired = fire(&mut p, 880.0, 300.0, &cfg);

        assert!(fired);
        assert_eq!(p.projectiles.len(), 1);
        assert_eq!(p.shoot_cooldown, 20);
        let proj = p.projectiles[0];
        assert_eq!((proj.x, proj.y), (120.0, 300.0));
        assert_eq!(proj.owner, PlayerSlot::One);
    }

    #[test]
    fn when_cooldown_is_running_then_fire_is_a_no_op() {
        let cfg = ProjectileTuning::default();
        let mut p = shooter();
        p.shoot_cooldown = 1;

        let fired = fire(&mut p, 880.0, 300.0, &cfg);

        assert!(!fired);
        assert!(p.projectiles.is_empty());
        assert_eq!(p.shoot_cooldown, 1);
    }

    #[test]
    fn when_target_is_own_center_then_no_projectile_and_cooldown_is_untouched() {
        let cfg = ProjectileTuning::default();
        let mut p = shooter();

        let fired = fire(&mut p, 120.0, 300.0, &cfg);

        assert!(!fired);
        assert!(p.projectiles.is_empty());
        assert_eq!(p.shoot_cooldown, 0);
    }

    #[test]
    fn when_firing_at_an_angle_then_velocity_has_fixed_magnitude_toward_target() {
        let cfg = ProjectileTuning::default();
        let mut p = shooter();

        // 3-4-5 triangle from the center.
        fire(&mut p, 120.0 + 30.0, 300.0 - 40.0, &cfg);

        let proj = p.projectiles[0];
        let magnitude = (proj.vx * proj.vx + proj.vy * proj.vy).sqrt();
        assert!((magnitude - 10.0).abs() < 1e-4);
        assert!((proj.vx - 6.0).abs() < 1e-4);
        assert!((proj.vy + 8.0).abs() < 1e-4);
    }

    #[test]
    fn when_ticking_then_cooldown_decrements_and_floors_at_zero() {
        let bounds = Playfield::default();
        let mut p = shooter();
        p.shoot_cooldown = 1;

        tick_player(&mut p, &bounds);
        assert_eq!(p.shoot_cooldown, 0);

        tick_player(&mut p, &bounds);
        assert_eq!(p.shoot_cooldown, 0);
    }

    #[test]
    fn when_ticking_then_projectiles_advance_by_velocity() {
        let mut p = shooter();
        p.projectiles.push(projectile(120.0, 300.0, 10.0, 0.0));

        tick_player(&mut p, &Playfield::default());

        assert_eq!((p.projectiles[0].x, p.projectiles[0].y), (130.0, 300.0));
    }

    #[test]
    fn when_projectile_exits_playfield_then_it_is_removed_on_that_tick() {
        let bounds = Playfield::default();
        let mut p = shooter();
        p.projectiles.push(projectile(995.0, 300.0, 10.0, 0.0));

        tick_player(&mut p, &bounds);
        assert!(p.projectiles.is_empty());

        // Stays gone on later ticks.
        tick_player(&mut p, &bounds);
        assert!(p.projectiles.is_empty());
    }

    #[test]
    fn when_projectile_lands_exactly_on_edge_then_it_survives() {
        let mut p = shooter();
        p.projectiles.push(projectile(990.0, 300.0, 10.0, 0.0));

        tick_player(&mut p, &Playfield::default());

        assert_eq!(p.projectiles.len(), 1);
        assert_eq!(p.projectiles[0].x, 1000.0);
    }

    #[test]
    fn when_adjacent_projectiles_exit_together_then_none_are_skipped() {
        let mut p = shooter();
        p.projectiles.push(projectile(5.0, 300.0, -10.0, 0.0));
        p.projectiles.push(projectile(5.0, 5.0, 0.0, -10.0));
        p.projectiles.push(projectile(500.0, 300.0, 10.0, 0.0));
        p.projectiles.push(projectile(500.0, 595.0, 0.0, 10.0));

        tick_player(&mut p, &Playfield::default());

        assert_eq!(p.projectiles.len(), 1);
        assert_eq!((p.projectiles[0].x, p.projectiles[0].y), (510.0, 300.0));
    }
}
