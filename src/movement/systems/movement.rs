//! Movement domain: locomotion systems for ground detection and physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    Facing, GameLayer, InputLocked, MovementInput, MovementState, MovementTuning, Player,
};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not enemies)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        // Cast a short ray downward from the player's feet
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_ray_distance,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, (With<Player>, Without<InputLocked>)>,
) {
    let dt = time.delta_secs();

    for mut velocity in &mut query {
        let target_vx = input.axis.x * tuning.max_speed;

        if input.axis.x.abs() > 0.1 {
            // Accelerate toward target
            let accel = tuning.accel * dt;
            if velocity.x < target_vx {
                velocity.x = (velocity.x + accel).min(target_vx);
            } else {
                velocity.x = (velocity.x - accel).max(target_vx);
            }
        } else {
            // Decelerate to zero
            let decel = tuning.decel * dt;
            if velocity.x > 0.0 {
                velocity.x = (velocity.x - decel).max(0.0);
            } else {
                velocity.x = (velocity.x + decel).min(0.0);
            }
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), (With<Player>, Without<InputLocked>)>,
) {
    for (state, mut velocity) in &mut query {
        if input.jump_just_pressed && state.on_ground {
            velocity.y = tuning.jump_velocity;
        }
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut velocity in &mut query {
        velocity.y -= tuning.gravity * dt;
    }
}

/// The player faces the aim point, not the travel direction.
pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<
        (&Transform, &mut MovementState, &mut Sprite),
        (With<Player>, Without<InputLocked>),
    >,
) {
    let Some(aim) = input.aim_world else {
        return;
    };

    for (transform, mut state, mut sprite) in &mut query {
        state.facing = if aim.x >= transform.translation.x {
            Facing::Right
        } else {
            Facing::Left
        };
        sprite.flip_x = state.facing == Facing::Left;
    }
}
