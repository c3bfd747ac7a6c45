//! Combat domain: the player's melee swing, advanced one tick at a time.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::components::{
    ActiveSwing, Respawning, WEAPON_PIVOT_OFFSET, WeaponPivot, swing_angles,
};
use crate::combat::events::DamageEvent;
use crate::combat::resources::{CombatInput, SwingTuning};
use crate::movement::{Facing, GameLayer, MovementInput, MovementState, Player};

/// Keep the weapon anchor on the side the player faces.
pub(crate) fn update_weapon_pivot(
    player_query: Query<&MovementState, With<Player>>,
    mut pivot_query: Query<&mut Transform, With<WeaponPivot>>,
) {
    let Ok(state) = player_query.single() else {
        return;
    };

    let x = match state.facing {
        Facing::Right => WEAPON_PIVOT_OFFSET,
        Facing::Left => -WEAPON_PIVOT_OFFSET,
    };
    for mut transform in &mut pivot_query {
        transform.translation.x = x;
    }
}

/// Accept an attack command and start a swing. A command arriving while a
/// swing is in progress (or while the player is dead) is ignored.
pub(crate) fn begin_swing(
    mut commands: Commands,
    input: Res<CombatInput>,
    move_input: Res<MovementInput>,
    tuning: Res<SwingTuning>,
    player_query: Query<
        (Entity, &MovementState),
        (With<Player>, Without<ActiveSwing>, Without<Respawning>),
    >,
    mut pivot_query: Query<(&GlobalTransform, &mut Visibility), With<WeaponPivot>>,
) {
    if !input.attack_just_pressed {
        return;
    }
    let Ok((player, state)) = player_query.single() else {
        return;
    };
    let Ok((pivot_transform, mut visibility)) = pivot_query.single_mut() else {
        return;
    };

    let origin = pivot_transform.translation().truncate();
    let aim = move_input.aim_world.unwrap_or(origin) - origin;
    let (start_angle, end_angle) = swing_angles(aim, state.facing, tuning.half_spread);

    commands
        .entity(player)
        .insert(ActiveSwing::new(origin, start_angle, end_angle, tuning.duration));
    *visibility = Visibility::Visible;

    debug!(
        "Swing started: {:.1} -> {:.1} deg, facing {:?}",
        start_angle, end_angle, state.facing
    );
}

/// Advance the swing for this tick: rotate the blade along the arc and,
/// once when progress first enters the mid-swing window, sample nearby
/// enemies for hits. Each enemy is damaged at most once per swing.
pub(crate) fn advance_swing(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<SwingTuning>,
    spatial_query: SpatialQuery,
    mut damage_events: MessageWriter<DamageEvent>,
    mut player_query: Query<(Entity, &mut ActiveSwing), With<Player>>,
    mut pivot_query: Query<(&mut Transform, &mut Visibility), With<WeaponPivot>>,
) {
    let Ok((player, mut swing)) = player_query.single_mut() else {
        return;
    };

    swing.advance(time.delta_secs());

    if let Ok((mut pivot_transform, _)) = pivot_query.single_mut() {
        pivot_transform.rotation = Quat::from_rotation_z(swing.current_angle().to_radians());
    }

    if swing.take_strike() {
        // The arc is approximated by a full circle around the swing origin
        // rather than a true angular sector.
        let hits = spatial_query.shape_intersections(
            &Collider::circle(tuning.hit_radius),
            swing.origin,
            0.0,
            &SpatialQueryFilter::from_mask(GameLayer::Enemy),
        );

        for target in hits {
            if swing.register_hit(target) {
                damage_events.write(DamageEvent {
                    source: player,
                    target,
                    amount: tuning.damage,
                });
            }
        }
    }

    if swing.is_finished() {
        commands.entity(player).remove::<ActiveSwing>();
        if let Ok((_, mut visibility)) = pivot_query.single_mut() {
            *visibility = Visibility::Hidden;
        }
    }
}
