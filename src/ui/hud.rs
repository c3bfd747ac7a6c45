//! UI domain: player HUD health bar.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::HealthChangedEvent;
use crate::movement::Player;

pub(crate) const HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const HEALTHBAR_PADDING: f32 = 16.0;

const WARNING_THRESHOLD: f32 = 0.5;
const DANGER_THRESHOLD: f32 = 0.25;
const ANIMATION_SPEED: f32 = 5.0;

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct PlayerHealthBarUI;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

/// The bar animates toward `target` rather than snapping.
#[derive(Resource, Debug)]
pub struct HudHealth {
    pub target: f32,
    pub displayed: f32,
}

impl Default for HudHealth {
    fn default() -> Self {
        Self {
            target: 1.0,
            displayed: 1.0,
        }
    }
}

pub(crate) fn spawn_player_healthbar(mut commands: Commands) {
    commands
        .spawn((
            PlayerHealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HEALTHBAR_PADDING),
                top: Val::Px(HEALTHBAR_PADDING),
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });
}

/// Pick up health-changed notifications for the player.
pub(crate) fn read_health_changes(
    mut health_changed: MessageReader<HealthChangedEvent>,
    player_query: Query<Entity, With<Player>>,
    mut hud: ResMut<HudHealth>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for event in health_changed.read() {
        if event.entity == player && event.max > 0.0 {
            hud.target = (event.current / event.max).clamp(0.0, 1.0);
        }
    }
}

/// Ease the fill toward the target and shade it by remaining health.
pub(crate) fn animate_healthbar(
    time: Res<Time>,
    mut hud: ResMut<HudHealth>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    let t = (ANIMATION_SPEED * time.delta_secs()).min(1.0);
    hud.displayed += (hud.target - hud.displayed) * t;

    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(hud.displayed * 100.0);

        bg_color.0 = if hud.displayed > WARNING_THRESHOLD {
            Color::srgb(0.2, 0.8, 0.3)
        } else if hud.displayed > DANGER_THRESHOLD {
            Color::srgb(0.9, 0.8, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
    }
}
