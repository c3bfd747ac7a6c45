//! Movement domain: player and level bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{
    Combatant, FlashEffect, Health, Invincibility, RespawnPoint, Team, WEAPON_PIVOT_OFFSET,
    WeaponPivot, WeaponSprite,
};
use crate::movement::{GameLayer, Ground, MovementState, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_MAX_HEALTH: f32 = 100.0;
const WEAPON_LENGTH: f32 = 28.0;

pub(crate) fn spawn_player(mut commands: Commands) {
    let spawn_pos = Vec2::new(0.0, 40.0);

    commands
        .spawn((
            Player,
            MovementState::default(),
            Combatant,
            Team::Player,
            Health::new(PLAYER_MAX_HEALTH),
            Invincibility::default(),
            FlashEffect::new(Color::srgb(0.9, 0.9, 0.9)),
            RespawnPoint(spawn_pos),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(spawn_pos.x, spawn_pos.y, 0.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Enemy]),
                LinearVelocity::default(),
                LockedAxes::ROTATION_LOCKED,
                GravityScale(0.0), // gravity is applied by the movement systems
            ),
        ))
        .with_children(|parent| {
            // Weapon pivot rotates during a swing; the blade sprite hangs off
            // it along +X so rotation 0 points right.
            parent
                .spawn((
                    WeaponPivot,
                    Transform::from_xyz(WEAPON_PIVOT_OFFSET, 0.0, 0.0),
                    Visibility::Hidden,
                ))
                .with_child((
                    WeaponSprite,
                    Sprite {
                        color: Color::srgb(0.7, 0.7, 0.75),
                        custom_size: Some(Vec2::new(WEAPON_LENGTH, 4.0)),
                        ..default()
                    },
                    Transform::from_xyz(WEAPON_LENGTH * 0.5, 0.0, 1.0),
                ));
        });
}

pub(crate) fn spawn_ground(mut commands: Commands) {
    let size = Vec2::new(2400.0, 40.0);

    commands.spawn((
        Ground,
        Sprite {
            color: Color::srgb(0.25, 0.22, 0.2),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
    ));
}
