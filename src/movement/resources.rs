//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub ground_ray_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 300.0,
            accel: 2800.0,
            decel: 2400.0,
            jump_velocity: 620.0,
            gravity: 1600.0,
            ground_ray_distance: 4.0,
        }
    }
}

/// Sampled input state for the current tick. The aim point comes from the
/// cursor projected into world space and may be absent while the cursor is
/// outside the window.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub aim_world: Option<Vec2>,
}
