//! Combat domain: the damage pipeline and death/respawn transitions.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    ActiveSwing, Combatant, Dying, Enemy, Health, Invincibility, Respawning, RespawnPoint, Team,
    WeaponPivot,
};
use crate::combat::events::{
    DamageEvent, DeathEvent, HealthChangedEvent, HitReactionEvent, PlayerDiedEvent,
    PlayerRespawnedEvent,
};
use crate::combat::resources::CombatTuning;
use crate::movement::{InputLocked, Player};

/// Single entry point for all damage. Invalid requests (non-positive
/// amount, friendly fire, invincible or already-dead target, missing
/// entity) degrade to no-ops; nothing here can fail the tick.
pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut health_changed: MessageWriter<HealthChangedEvent>,
    mut hit_reactions: MessageWriter<HitReactionEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    tuning: Res<CombatTuning>,
    teams: Query<&Team>,
    mut query: Query<(&mut Health, Option<&mut Invincibility>, Has<Player>), With<Combatant>>,
) {
    for event in damage_events.read() {
        if event.amount <= 0.0 {
            debug!("Rejected damage event with amount {}", event.amount);
            continue;
        }
        if let (Ok(source_team), Ok(target_team)) =
            (teams.get(event.source), teams.get(event.target))
            && source_team == target_team
        {
            continue;
        }
        let Ok((mut health, invincibility, is_player)) = query.get_mut(event.target) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }
        if let Some(ref invuln) = invincibility
            && invuln.is_active()
        {
            continue;
        }

        health.damage(event.amount);

        // Fire-and-forget notifications for the UI and presentation layers
        health_changed.write(HealthChangedEvent {
            entity: event.target,
            current: health.current,
            max: health.max,
        });
        hit_reactions.write(HitReactionEvent {
            entity: event.target,
        });

        // Only the player gets a post-hit invincibility window
        if is_player && let Some(mut invuln) = invincibility {
            invuln.timer = tuning.invincibility_duration;
        }

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Player death: lock input, stop moving, interrupt any swing, and
/// schedule the respawn. A death event for an already-respawning player
/// is a no-op.
pub(crate) fn handle_player_death(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
    tuning: Res<CombatTuning>,
    mut player_query: Query<(&mut LinearVelocity, Has<Respawning>), With<Player>>,
    mut pivot_query: Query<&mut Visibility, With<WeaponPivot>>,
) {
    for event in death_events.read() {
        let Ok((mut velocity, already_respawning)) = player_query.get_mut(event.entity) else {
            continue;
        };
        if already_respawning {
            continue;
        }

        velocity.0 = Vec2::ZERO;
        commands.entity(event.entity).insert((
            Respawning {
                timer: tuning.respawn_delay,
            },
            InputLocked,
        ));
        commands.entity(event.entity).remove::<ActiveSwing>();
        if let Ok(mut visibility) = pivot_query.single_mut() {
            *visibility = Visibility::Hidden;
        }

        died_events.write(PlayerDiedEvent);
        info!("Player died, respawning in {}s", tuning.respawn_delay);
    }
}

/// Enemy death: freeze the entity, tint it for the death animation window,
/// and schedule removal after the grace delay. Idempotent for enemies that
/// are already dying.
pub(crate) fn handle_enemy_death(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    tuning: Res<CombatTuning>,
    mut enemy_query: Query<
        (&mut LinearVelocity, &mut Sprite, Has<Dying>),
        (With<Enemy>, Without<Player>),
    >,
) {
    for event in death_events.read() {
        let Ok((mut velocity, mut sprite, already_dying)) = enemy_query.get_mut(event.entity)
        else {
            continue;
        };
        if already_dying {
            continue;
        }

        velocity.0 = Vec2::ZERO;
        sprite.color = Color::srgb(0.4, 0.4, 0.4);
        commands.entity(event.entity).insert(Dying {
            timer: tuning.removal_grace,
        });

        info!("Enemy {:?} died, removal in {}s", event.entity, tuning.removal_grace);
    }
}

/// Count down the respawn delay; on expiry reset the player at the stored
/// respawn point with full health and a fresh invincibility window.
pub(crate) fn tick_respawn(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut health_changed: MessageWriter<HealthChangedEvent>,
    mut respawned_events: MessageWriter<PlayerRespawnedEvent>,
    mut player_query: Query<
        (
            Entity,
            &mut Respawning,
            &mut Transform,
            &mut Health,
            &mut Invincibility,
            &RespawnPoint,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut respawning, mut transform, mut health, mut invuln, respawn_point) in
        &mut player_query
    {
        respawning.timer -= dt;
        if respawning.timer > 0.0 {
            continue;
        }

        transform.translation.x = respawn_point.0.x;
        transform.translation.y = respawn_point.0.y;
        health.restore_full();
        invuln.timer = tuning.invincibility_duration;
        commands.entity(entity).remove::<(Respawning, InputLocked)>();

        health_changed.write(HealthChangedEvent {
            entity,
            current: health.current,
            max: health.max,
        });
        respawned_events.write(PlayerRespawnedEvent);
        info!("Player respawned at {:?}", respawn_point.0);
    }
}

/// Remove dying enemies once their grace delay elapses.
pub(crate) fn tick_dying(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Dying)>,
) {
    let dt = time.delta_secs();

    for (entity, mut dying) in &mut query {
        dying.timer -= dt;
        if dying.timer <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
