//! Combat domain: enemy bundle and seeded level population.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::components::{Combatant, Enemy, EnemyAi, FlashEffect, Health, Team};
use crate::combat::resources::EnemyTuning;
use crate::core::WorldSeed;
use crate::movement::GameLayer;

const ENEMY_SIZE: Vec2 = Vec2::new(32.0, 32.0);
const ENEMY_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);

#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub combatant: Combatant,
    pub team: Team,
    pub health: Health,
    pub ai: EnemyAi,
    pub flash: FlashEffect,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
}

impl EnemyBundle {
    pub fn new(position: Vec2, tuning: &EnemyTuning) -> Self {
        Self {
            enemy: Enemy,
            combatant: Combatant,
            team: Team::Enemy,
            health: Health::new(tuning.max_health),
            ai: EnemyAi::new(tuning.attack_range, tuning.detection_range),
            flash: FlashEffect::new(ENEMY_COLOR),
            sprite: Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::Player],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            // Pursuit is straight-line in both axes
            gravity_scale: GravityScale(0.0),
        }
    }
}

/// Place the level's enemies from the world seed so a given seed always
/// produces the same layout.
pub(crate) fn populate_level(
    mut commands: Commands,
    seed: Res<WorldSeed>,
    tuning: Res<EnemyTuning>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.0);

    for _ in 0..tuning.spawn_count {
        let mut x = rng.random_range(-900.0..900.0_f32);
        // Keep a clear zone around the player spawn
        if x.abs() < 200.0 {
            x += if x < 0.0 { -300.0 } else { 300.0 };
        }
        let y = rng.random_range(-120.0..160.0_f32);

        commands.spawn(EnemyBundle::new(Vec2::new(x, y), &tuning));
    }

    info!("Populated level with {} enemies (seed {})", tuning.spawn_count, seed.0);
}
