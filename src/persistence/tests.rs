//! Persistence domain: save file IO and restore tests.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{SaveData, SavePath, apply_save_on_startup, load_save, write_save};
use crate::combat::{Health, HealthChangedEvent, RespawnPoint};
use crate::movement::Player;

#[test]
fn save_survives_a_disk_round_trip() {
    let dir = std::env::temp_dir().join("hearthfall_save_test");
    let path = dir.join("quicksave.json");

    let data = SaveData {
        player_position: Vec2::new(120.0, -40.0),
        health: 55.0,
        max_health: 100.0,
        respawn_position: Vec2::new(0.0, 40.0),
    };

    write_save(&data, &path).expect("save should write");
    let restored = load_save(&path).expect("save should load");
    assert_eq!(restored, data);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn restoring_a_save_notifies_health_listeners() {
    let dir = std::env::temp_dir().join("hearthfall_restore_test");
    let path = dir.join("quicksave.json");

    let data = SaveData {
        player_position: Vec2::new(80.0, 10.0),
        health: 55.0,
        max_health: 100.0,
        respawn_position: Vec2::new(0.0, 40.0),
    };
    write_save(&data, &path).expect("save should write");

    let mut app = App::new();
    app.add_message::<HealthChangedEvent>()
        .insert_resource(SavePath(path))
        .add_systems(Update, apply_save_on_startup);
    let player = app
        .world_mut()
        .spawn((
            Player,
            Transform::default(),
            Health::new(100.0),
            RespawnPoint(Vec2::ZERO),
        ))
        .id();

    app.update();

    let health = app.world().get::<Health>(player).expect("player health");
    assert_eq!(health.current, 55.0);

    // The HUD listens for this; without it the bar would sit at full
    // until the next hit.
    let messages = app.world().resource::<Messages<HealthChangedEvent>>();
    let mut cursor = messages.get_cursor();
    let received: Vec<_> = cursor.read(messages).collect();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].entity, player);
    assert_eq!(received[0].current, 55.0);
    assert_eq!(received[0].max, 100.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_or_malformed_saves_load_as_none() {
    let dir = std::env::temp_dir().join("hearthfall_bad_save_test");
    let path = dir.join("quicksave.json");

    assert!(load_save(&path).is_none());

    std::fs::create_dir_all(&dir).expect("temp dir");
    std::fs::write(&path, "not json at all").expect("write garbage");
    assert!(load_save(&path).is_none());

    let _ = std::fs::remove_dir_all(&dir);
}
