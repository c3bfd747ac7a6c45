//! Combat domain: input sampling, shared timers, and flash visuals.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{Dying, Enemy, EnemyAi, FlashEffect, Invincibility};
use crate::combat::events::HitReactionEvent;
use crate::combat::resources::{CombatInput, CombatTuning};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack_just_pressed =
        mouse.just_pressed(MouseButton::Left) || keyboard.just_pressed(KeyCode::KeyZ);
}

/// Advance every countdown timer once per tick. A deadline that has
/// already passed is simply treated as expired.
pub(crate) fn tick_combat_timers(
    time: Res<Time>,
    mut invincibility: Query<&mut Invincibility>,
    mut flashes: Query<&mut FlashEffect>,
    mut enemies: Query<&mut EnemyAi, With<Enemy>>,
) {
    let dt = time.delta_secs();

    for mut invuln in &mut invincibility {
        if invuln.timer > 0.0 {
            invuln.timer -= dt;
        }
    }

    for mut flash in &mut flashes {
        if flash.timer > 0.0 {
            flash.timer -= dt;
        }
    }

    for mut ai in &mut enemies {
        if ai.attack_cooldown_timer > 0.0 {
            ai.attack_cooldown_timer -= dt;
        }
    }
}

/// Presentation sink for hit reactions: tint the sprite for the flash
/// duration. Dying entities keep their death tint.
pub(crate) fn trigger_hit_flash(
    mut hit_reactions: MessageReader<HitReactionEvent>,
    tuning: Res<CombatTuning>,
    mut query: Query<&mut FlashEffect, Without<Dying>>,
) {
    for event in hit_reactions.read() {
        if let Ok(mut flash) = query.get_mut(event.entity) {
            flash.trigger(Color::srgb(1.0, 0.4, 0.4), tuning.hurt_flash_duration);
        }
    }
}

pub(crate) fn update_flash_visuals(
    mut query: Query<(&FlashEffect, &mut Sprite), Without<Dying>>,
) {
    for (flash, mut sprite) in &mut query {
        sprite.color = if flash.is_active() {
            flash.flash_color
        } else {
            flash.base_color
        };
    }
}
