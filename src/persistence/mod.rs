//! Persistence domain: JSON quick-save of the player's position and health.

mod save;

#[cfg(test)]
mod tests;

pub use save::{SaveData, SaveError, load_save, write_save};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::combat::{Health, HealthChangedEvent, RespawnPoint};
use crate::core::GameState;
use crate::movement::Player;

/// Where the quick save lives on disk.
#[derive(Resource, Debug)]
pub struct SavePath(pub PathBuf);

impl Default for SavePath {
    fn default() -> Self {
        Self(PathBuf::from("saves/quicksave.json"))
    }
}

/// F5 snapshots the player's position and health to disk.
fn quick_save(
    keyboard: Res<ButtonInput<KeyCode>>,
    path: Res<SavePath>,
    player_query: Query<(&Transform, &Health, &RespawnPoint), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }
    let Ok((transform, health, respawn_point)) = player_query.single() else {
        return;
    };

    let data = SaveData {
        player_position: transform.translation.truncate(),
        health: health.current,
        max_health: health.max,
        respawn_position: respawn_point.0,
    };

    match write_save(&data, &path.0) {
        Ok(()) => info!("Quick save written to {}", path.0.display()),
        Err(e) => warn!("Quick save failed: {}", e),
    }
}

/// Restore a previous session's position and health, if a save exists.
/// Runs after the player has been spawned. The health listeners are
/// notified so the HUD starts from the restored value.
fn apply_save_on_startup(
    path: Res<SavePath>,
    mut health_changed: MessageWriter<HealthChangedEvent>,
    mut player_query: Query<
        (Entity, &mut Transform, &mut Health, &mut RespawnPoint),
        With<Player>,
    >,
) {
    let Some(data) = load_save(&path.0) else {
        return;
    };
    let Ok((entity, mut transform, mut health, mut respawn_point)) = player_query.single_mut()
    else {
        return;
    };

    transform.translation.x = data.player_position.x;
    transform.translation.y = data.player_position.y;
    health.max = data.max_health;
    health.current = data.health.clamp(0.0, data.max_health);
    respawn_point.0 = data.respawn_position;

    health_changed.write(HealthChangedEvent {
        entity,
        current: health.current,
        max: health.max,
    });

    info!(
        "Restored save: position {:?}, health {}/{}",
        data.player_position, health.current, health.max
    );
}

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SavePath>()
            .add_systems(PostStartup, apply_save_on_startup)
            .add_systems(Update, quick_save.run_if(in_state(GameState::Playing)));
    }
}
