//! Debug overlay for tuning combat: range circles for enemy behavior and
//! the swing's hit sample. Toggled with F3, behind the `dev-tools` feature.

use bevy::prelude::*;

use crate::combat::{ActiveSwing, Enemy, EnemyAi, SwingTuning};
use crate::movement::Player;

#[derive(Resource, Debug, Default)]
pub struct DebugOverlay {
    pub enabled: bool,
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<DebugOverlay>) {
    if keyboard.just_pressed(KeyCode::F3) {
        overlay.enabled = !overlay.enabled;
        info!("Debug overlay: {}", if overlay.enabled { "on" } else { "off" });
    }
}

fn draw_combat_gizmos(
    overlay: Res<DebugOverlay>,
    mut gizmos: Gizmos,
    swing_tuning: Res<SwingTuning>,
    enemy_query: Query<(&Transform, &EnemyAi), With<Enemy>>,
    swing_query: Query<&ActiveSwing, With<Player>>,
) {
    if !overlay.enabled {
        return;
    }

    for (transform, ai) in &enemy_query {
        let pos = transform.translation.truncate();
        gizmos.circle_2d(pos, ai.detection_range, Color::srgba(1.0, 1.0, 0.0, 0.4));
        gizmos.circle_2d(pos, ai.attack_range, Color::srgba(1.0, 0.0, 0.0, 0.4));
    }

    for swing in &swing_query {
        gizmos.circle_2d(swing.origin, swing_tuning.hit_radius, Color::srgba(0.2, 0.8, 1.0, 0.6));
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>()
            .add_systems(Update, (toggle_overlay, draw_combat_gizmos).chain());
    }
}
