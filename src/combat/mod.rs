//! Combat domain: health, enemy behavior, melee swings, and the damage
//! pipeline.

mod ai;
mod components;
mod damage;
mod events;
mod resources;
mod spawn;
mod swing;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ActiveSwing, AiState, Combatant, Dying, Enemy, EnemyAi, FlashEffect, Health, Invincibility,
    Respawning, RespawnPoint, Team, WEAPON_PIVOT_OFFSET, WeaponPivot, WeaponSprite, swing_angles,
};
pub use events::{
    DamageEvent, DeathEvent, HealthChangedEvent, HitReactionEvent, PlayerDiedEvent,
    PlayerRespawnedEvent,
};
pub use resources::{CombatInput, CombatTuning, EnemyTuning, SwingTuning};

use bevy::prelude::*;

use crate::combat::ai::{apply_enemy_movement, process_enemy_attacks, update_enemy_state};
use crate::combat::damage::{
    apply_damage, handle_enemy_death, handle_player_death, tick_dying, tick_respawn,
};
use crate::combat::spawn::populate_level;
use crate::combat::swing::{advance_swing, begin_swing, update_weapon_pivot};
use crate::combat::systems::{
    read_combat_input, tick_combat_timers, trigger_hit_flash, update_flash_visuals,
};
use crate::core::GameState;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<SwingTuning>()
            .init_resource::<EnemyTuning>()
            .init_resource::<CombatInput>()
            .add_message::<DamageEvent>()
            .add_message::<HealthChangedEvent>()
            .add_message::<HitReactionEvent>()
            .add_message::<DeathEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<PlayerRespawnedEvent>()
            .add_systems(Startup, populate_level)
            .add_systems(
                Update,
                (
                    (read_combat_input, tick_combat_timers).chain(),
                    (update_enemy_state, apply_enemy_movement, process_enemy_attacks).chain(),
                    (update_weapon_pivot, begin_swing, advance_swing).chain(),
                    (
                        apply_damage,
                        handle_player_death,
                        handle_enemy_death,
                        tick_respawn,
                        tick_dying,
                    )
                        .chain(),
                    (trigger_hit_flash, update_flash_visuals).chain(),
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
