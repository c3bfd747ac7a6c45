//! Combat domain: unit tests for the health model, behavior transitions,
//! swing logic, and the damage pipeline's guards.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::components::{
    ActiveSwing, AiState, Combatant, Dying, Enemy, Health, Respawning, Team, swing_angles,
};
use super::events::{
    DamageEvent, DeathEvent, HealthChangedEvent, HitReactionEvent, PlayerDiedEvent,
};
use super::resources::CombatTuning;
use crate::movement::{Facing, Player};

#[test]
fn behavior_state_is_pure_in_distance() {
    let attack_range = 1.5;
    let detection_range = 8.0;

    assert_eq!(
        AiState::for_distance(1.5, attack_range, detection_range),
        AiState::Attacking
    );
    assert_eq!(
        AiState::for_distance(1.6, attack_range, detection_range),
        AiState::Chasing
    );
    assert_eq!(
        AiState::for_distance(8.0, attack_range, detection_range),
        AiState::Chasing
    );
    assert_eq!(
        AiState::for_distance(8.1, attack_range, detection_range),
        AiState::Idle
    );

    // Re-deriving the same distance always yields the same state,
    // independent of any previous value
    for _ in 0..3 {
        assert_eq!(
            AiState::for_distance(0.0, attack_range, detection_range),
            AiState::Attacking
        );
    }
}

#[test]
fn health_stays_clamped() {
    let mut health = Health::new(100.0);

    health.damage(30.0);
    assert_eq!(health.current, 70.0);

    // Overkill clamps at zero
    health.damage(500.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());

    // Overheal clamps at max
    health.heal(1000.0);
    assert_eq!(health.current, 100.0);

    // Negative amounts are rejected
    health.damage(-20.0);
    assert_eq!(health.current, 100.0);
    health.heal(-20.0);
    assert_eq!(health.current, 100.0);
}

#[test]
fn lethal_damage_clamps_then_kills() {
    let mut health = Health::new(100.0);
    health.current = 5.0;

    let removed = health.damage(10.0);
    assert_eq!(removed, 5.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn swing_angles_sweep_bottom_to_top() {
    // Aiming straight right while facing right: the arc starts below the
    // aim line and ends above it
    let (start, end) = swing_angles(Vec2::X, Facing::Right, 60.0);
    assert_eq!(start, -60.0);
    assert_eq!(end, 60.0);

    // Facing left flips the sweep order so it still travels bottom-to-top
    let (start, end) = swing_angles(Vec2::new(-1.0, 0.0), Facing::Left, 60.0);
    assert_eq!(start, 240.0);
    assert_eq!(end, 120.0);

    // Base angle follows the aim direction
    let (start, end) = swing_angles(Vec2::Y, Facing::Right, 60.0);
    assert_eq!(start, 30.0);
    assert_eq!(end, 150.0);
}

#[test]
fn swing_interpolates_between_angles() {
    let mut swing = ActiveSwing::new(Vec2::ZERO, -60.0, 60.0, 0.3);
    assert_eq!(swing.current_angle(), -60.0);

    swing.advance(0.15);
    assert_eq!(swing.current_angle(), 0.0);

    swing.advance(0.15);
    assert_eq!(swing.current_angle(), 60.0);
    assert!(swing.is_finished());

    // Progress never exceeds 1, even past the duration
    swing.advance(1.0);
    assert_eq!(swing.progress(), 1.0);
    assert_eq!(swing.current_angle(), 60.0);
}

#[test]
fn strike_fires_once_across_window_ticks() {
    let mut swing = ActiveSwing::new(Vec2::ZERO, -60.0, 60.0, 0.3);

    // Before the window
    swing.advance(0.09); // p = 0.3
    assert!(!swing.take_strike());

    // Several ticks land inside [0.4, 0.6]; only the first fires
    swing.advance(0.045); // p = 0.45
    assert!(swing.take_strike());
    swing.advance(0.015); // p = 0.5
    assert!(!swing.take_strike());
    swing.advance(0.03); // p = 0.6
    assert!(!swing.take_strike());

    // And never again after the window
    swing.advance(0.12); // p = 1.0
    assert!(!swing.take_strike());
}

#[test]
fn swing_damages_each_enemy_at_most_once() {
    let mut world = World::new();
    let first = world.spawn_empty().id();
    let second = world.spawn_empty().id();

    let mut swing = ActiveSwing::new(Vec2::ZERO, -60.0, 60.0, 0.3);
    assert!(swing.register_hit(first));
    assert!(swing.register_hit(second));

    // A second overlap within the same swing is a no-op
    assert!(!swing.register_hit(first));
    assert!(!swing.register_hit(second));

    // A fresh swing starts with an empty hit set and can hit them again
    let mut next_swing = ActiveSwing::new(Vec2::ZERO, -60.0, 60.0, 0.3);
    assert!(next_swing.register_hit(first));
    assert!(next_swing.register_hit(second));
}

#[test]
fn repeated_death_events_do_not_reschedule_respawn() {
    let mut app = App::new();
    app.init_resource::<CombatTuning>()
        .add_message::<DeathEvent>()
        .add_message::<PlayerDiedEvent>()
        .add_systems(Update, super::damage::handle_player_death);

    let player = app
        .world_mut()
        .spawn((Player, LinearVelocity::default()))
        .id();
    app.world_mut().write_message(DeathEvent { entity: player });
    app.update();

    let respawning = app
        .world()
        .get::<Respawning>(player)
        .expect("death schedules a respawn");
    assert_eq!(respawning.timer, CombatTuning::default().respawn_delay);

    // A duplicate death event must not reset the partially elapsed delay
    app.world_mut().get_mut::<Respawning>(player).unwrap().timer = 0.4;
    app.world_mut().write_message(DeathEvent { entity: player });
    app.update();
    assert_eq!(app.world().get::<Respawning>(player).unwrap().timer, 0.4);

    // Listeners heard about the death exactly once
    let messages = app.world().resource::<Messages<PlayerDiedEvent>>();
    let mut cursor = messages.get_cursor();
    assert_eq!(cursor.read(messages).count(), 1);
}

#[test]
fn repeated_death_events_do_not_restart_enemy_removal() {
    let mut app = App::new();
    app.init_resource::<CombatTuning>()
        .add_message::<DeathEvent>()
        .add_systems(Update, super::damage::handle_enemy_death);

    let enemy = app
        .world_mut()
        .spawn((Enemy, Sprite::default(), LinearVelocity::default()))
        .id();
    app.world_mut().write_message(DeathEvent { entity: enemy });
    app.update();
    assert!(app.world().get::<Dying>(enemy).is_some());

    // A duplicate death event must not restart the removal grace timer
    app.world_mut().get_mut::<Dying>(enemy).unwrap().timer = 0.5;
    app.world_mut().write_message(DeathEvent { entity: enemy });
    app.update();
    assert_eq!(app.world().get::<Dying>(enemy).unwrap().timer, 0.5);
}

#[test]
fn damage_between_teammates_is_rejected() {
    let mut app = App::new();
    app.init_resource::<CombatTuning>()
        .add_message::<DamageEvent>()
        .add_message::<HealthChangedEvent>()
        .add_message::<HitReactionEvent>()
        .add_message::<DeathEvent>()
        .add_systems(Update, super::damage::apply_damage);

    let first = app
        .world_mut()
        .spawn((Combatant, Team::Enemy, Health::new(30.0)))
        .id();
    let second = app
        .world_mut()
        .spawn((Combatant, Team::Enemy, Health::new(30.0)))
        .id();
    app.world_mut().write_message(DamageEvent {
        source: first,
        target: second,
        amount: 10.0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(second).unwrap().current, 30.0);

    // Cross-team damage still lands
    let player = app
        .world_mut()
        .spawn((Player, Combatant, Team::Player, Health::new(100.0)))
        .id();
    app.world_mut().write_message(DamageEvent {
        source: first,
        target: player,
        amount: 10.0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 90.0);
}

#[test]
fn invincibility_gates_by_timer() {
    let mut invuln = super::Invincibility { timer: 0.5 };
    assert!(invuln.is_active());

    invuln.timer -= 0.5;
    assert!(!invuln.is_active());

    // An already-expired deadline reads as expired, not an error
    invuln.timer = -0.1;
    assert!(!invuln.is_active());
}
