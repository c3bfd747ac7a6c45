//! UI domain: death overlay shown while the player awaits respawn.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{PlayerDiedEvent, PlayerRespawnedEvent};

/// Marker for the death overlay
#[derive(Component)]
pub struct DeathOverlayUI;

pub(crate) fn show_death_overlay(
    mut commands: Commands,
    mut died_events: MessageReader<PlayerDiedEvent>,
    existing: Query<Entity, With<DeathOverlayUI>>,
) {
    if died_events.read().next().is_none() {
        return;
    }
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            DeathOverlayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("YOU DIED"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Returning to the hearth..."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

pub(crate) fn clear_death_overlay(
    mut commands: Commands,
    mut respawned_events: MessageReader<PlayerRespawnedEvent>,
    overlay_query: Query<Entity, With<DeathOverlayUI>>,
) {
    if respawned_events.read().next().is_none() {
        return;
    }

    for entity in &overlay_query {
        commands.entity(entity).despawn();
    }
}
