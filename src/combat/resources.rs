//! Combat domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Post-hit invincibility window (player only)
    pub invincibility_duration: f32,
    /// Red tint duration after taking a hit
    pub hurt_flash_duration: f32,
    /// Yellow tint duration on an enemy strike
    pub attack_flash_duration: f32,
    /// Delay between player death and respawn
    pub respawn_delay: f32,
    /// Grace period between enemy death and removal, reserved for the
    /// death animation
    pub removal_grace: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            invincibility_duration: 1.0,
            hurt_flash_duration: 0.2,
            attack_flash_duration: 0.1,
            respawn_delay: 2.0,
            removal_grace: 3.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwingTuning {
    pub damage: f32,
    /// Wall-clock length of one swing
    pub duration: f32,
    /// Half of the arc's angular spread, in degrees
    pub half_spread: f32,
    /// Radius of the overlap circle sampled mid-swing
    pub hit_radius: f32,
}

impl Default for SwingTuning {
    fn default() -> Self {
        Self {
            damage: 10.0,
            duration: 0.3,
            half_spread: 60.0,
            hit_radius: 72.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub max_health: f32,
    pub move_speed: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    pub attack_cooldown: f32,
    /// Number of enemies placed at level population
    pub spawn_count: u32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_health: 30.0,
            move_speed: 120.0,
            attack_damage: 10.0,
            attack_range: 56.0,
            detection_range: 320.0,
            attack_cooldown: 2.0,
            spawn_count: 5,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack_just_pressed: bool,
}
