//! Combat domain: enemy behavior state machine.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::components::{AiState, Dying, Enemy, EnemyAi, FlashEffect};
use crate::combat::events::DamageEvent;
use crate::combat::resources::{CombatTuning, EnemyTuning};
use crate::movement::Player;

/// Recompute each enemy's state from the current distance to the player.
/// Dying enemies and a missing player freeze the machine.
pub(crate) fn update_enemy_state(
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<(&Transform, &mut EnemyAi), (With<Enemy>, Without<Dying>)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut ai) in &mut enemy_query {
        let distance = player_pos.distance(transform.translation.truncate());
        ai.state = AiState::for_distance(distance, ai.attack_range, ai.detection_range);
    }
}

/// Straight-line pursuit while chasing; stationary otherwise. The sprite
/// flips to match the horizontal travel direction.
pub(crate) fn apply_enemy_movement(
    tuning: Res<EnemyTuning>,
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<
        (&Transform, &mut LinearVelocity, &mut Sprite, &EnemyAi),
        (With<Enemy>, Without<Dying>, Without<Player>),
    >,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut velocity, mut sprite, ai) in &mut enemy_query {
        match ai.state {
            AiState::Idle | AiState::Attacking => {
                velocity.0 = Vec2::ZERO;
            }
            AiState::Chasing => {
                let dir = (player_pos - transform.translation.truncate()).normalize_or_zero();
                velocity.0 = dir * tuning.move_speed;

                if dir.x > 0.0 {
                    sprite.flip_x = false;
                } else if dir.x < 0.0 {
                    sprite.flip_x = true;
                }
            }
        }
    }
}

/// In attack range, strike the player once per cooldown.
pub(crate) fn process_enemy_attacks(
    tuning: Res<EnemyTuning>,
    combat_tuning: Res<CombatTuning>,
    mut damage_events: MessageWriter<DamageEvent>,
    player_query: Query<Entity, With<Player>>,
    mut enemy_query: Query<
        (Entity, &mut EnemyAi, &mut FlashEffect),
        (With<Enemy>, Without<Dying>),
    >,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for (entity, mut ai, mut flash) in &mut enemy_query {
        if ai.state != AiState::Attacking || !ai.can_attack() {
            continue;
        }

        damage_events.write(DamageEvent {
            source: entity,
            target: player,
            amount: tuning.attack_damage,
        });
        ai.attack_cooldown_timer = tuning.attack_cooldown;

        // Brief wind-up tint so the strike reads visually
        flash.trigger(
            Color::srgb(1.0, 0.9, 0.2),
            combat_tuning.attack_flash_duration,
        );

        debug!("Enemy {:?} strikes player for {}", entity, tuning.attack_damage);
    }
}
