mod support;

use duel::domain::{InputSnapshot, PlayerInput, PlayerSlot};
use duel::use_cases::{MatchOutcome, MatchState};

#[test]
fn when_player_one_keeps_firing_at_idle_opponent_then_opponent_is_defeated_ten_points_at_a_time() {
    let mut duel = support::default_duel();
    assert_eq!(
        (duel.player(PlayerSlot::Two).x, duel.player(PlayerSlot::Two).y),
        (860.0, 270.0)
    );

    // First projectile needs 74 ticks to reach the expanded hitbox at x = 855.
    for _ in 0..73 {
        duel.step(&support::one_shoots());
    }
    assert_eq!(duel.player(PlayerSlot::Two).health, 100);

    let mut previous = duel.player(PlayerSlot::Two).health;
    let mut hits = 0;
    while !duel.player(PlayerSlot::Two).is_defeated() {
        let report = duel.step(&support::one_shoots());
        let health = duel.player(PlayerSlot::Two).health;
        if report.hits_by_one > 0 {
            assert_eq!(report.hits_by_one, 1);
            assert_eq!(health, previous - 10);
            hits += 1;
        } else {
            assert_eq!(health, previous);
        }
        previous = health;
        assert!(duel.tick() < 1_000, "opponent should fall well before tick 1000");
    }

    assert_eq!(hits, 10);
    // Hits land 20 ticks apart, starting at tick 74.
    assert_eq!(duel.tick(), 74 + 9 * 20);
    assert_eq!(
        duel.outcome(),
        Some(MatchOutcome::Winner(PlayerSlot::One))
    );

    // Further hits never push health below zero.
    for _ in 0..200 {
        duel.step(&support::one_shoots());
    }
    let update = duel.world_update();
    assert_eq!(update.player(PlayerSlot::Two).health, 0);
    assert!(update.player(PlayerSlot::Two).defeated);
    assert_eq!(
        update.state,
        MatchState::Ended(MatchOutcome::Winner(PlayerSlot::One))
    );
}

#[test]
fn when_player_is_pushed_left_repeatedly_then_it_clamps_to_zero_exactly() {
    let mut duel = support::default_duel();
    let input = InputSnapshot {
        one: PlayerInput {
            left: true,
            ..PlayerInput::default()
        },
        two: PlayerInput::default(),
    };

    for _ in 0..100 {
        duel.step(&input);
        assert!(duel.player(PlayerSlot::One).x >= 0.0);
    }

    assert_eq!(duel.player(PlayerSlot::One).x, 0.0);
}

#[test]
fn when_every_direction_combination_is_held_then_players_stay_inside_playfield() {
    let mut duel = support::default_duel();
    let bounds = *duel.playfield();

    for mask in 0u8..16 {
        let input = PlayerInput {
            up: mask & 1 != 0,
            down: mask & 2 != 0,
            left: mask & 4 != 0,
            right: mask & 8 != 0,
            shoot: false,
        };
        for _ in 0..250 {
            duel.step(&InputSnapshot {
                one: input,
                two: input,
            });
            for slot in PlayerSlot::ALL {
                let p = duel.player(slot);
                assert!(p.x >= 0.0 && p.x <= bounds.width - p.width);
                assert!(p.y >= 0.0 && p.y <= bounds.height - p.height);
            }
        }
    }
}

#[test]
fn when_shots_miss_then_they_are_culled_at_the_playfield_edge() {
    let mut duel = support::default_duel();
    // Move player two out of the firing line before player one shoots.
    let dodge = InputSnapshot {
        one: PlayerInput::default(),
        two: PlayerInput {
            up: true,
            ..PlayerInput::default()
        },
    };
    for _ in 0..60 {
        duel.step(&dodge);
    }
    assert_eq!(duel.player(PlayerSlot::Two).y, 0.0);

    // Aim is taken at fire time; keep player two still and step aside afterwards.
    duel.step(&support::one_shoots());
    assert_eq!(duel.player(PlayerSlot::One).projectiles.len(), 1);
    for _ in 0..40 {
        duel.step(&InputSnapshot {
            one: PlayerInput::default(),
            two: PlayerInput {
                down: true,
                ..PlayerInput::default()
            },
        });
    }
    assert_eq!(duel.player(PlayerSlot::Two).y, 200.0);

    for _ in 0..200 {
        duel.step(&InputSnapshot::default());
    }

    assert!(duel.player(PlayerSlot::One).projectiles.is_empty());
    assert_eq!(duel.player(PlayerSlot::Two).health, 100);
}
