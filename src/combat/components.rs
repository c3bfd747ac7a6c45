//! Combat domain: components and combat-related state types.

use bevy::ecs::entity::EntityHashSet;
use bevy::prelude::*;

use crate::movement::Facing;

/// Marks an entity as a combat participant
#[derive(Component, Debug)]
pub struct Combatant;

/// Team affiliation to prevent friendly fire
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Health component for damageable entities.
/// `current` is clamped to `[0, max]` through every mutation.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamping at zero. Returns the amount actually removed.
    pub fn damage(&mut self, amount: f32) -> f32 {
        let actual = amount.clamp(0.0, self.current);
        self.current -= actual;
        actual
    }

    /// Heal, clamping at max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.clamp(0.0, self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn restore_full(&mut self) {
        self.current = self.max;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Invincibility window - entity cannot take damage while the timer runs
#[derive(Component, Debug, Default)]
pub struct Invincibility {
    pub timer: f32,
}

impl Invincibility {
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }
}

/// Short cosmetic tint applied on hits and attack wind-ups.
/// The sprite shows `flash_color` while the timer runs, then `base_color`.
#[derive(Component, Debug)]
pub struct FlashEffect {
    pub timer: f32,
    pub flash_color: Color,
    pub base_color: Color,
}

impl FlashEffect {
    pub fn new(base_color: Color) -> Self {
        Self {
            timer: 0.0,
            flash_color: base_color,
            base_color,
        }
    }

    pub fn trigger(&mut self, color: Color, duration: f32) {
        self.flash_color = color;
        self.timer = duration;
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Distance-driven enemy intent, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Idle,
    Chasing,
    Attacking,
}

impl AiState {
    /// Pure transition function: the state is fully determined by the
    /// current distance to the player and the two radii, with no hysteresis.
    pub fn for_distance(distance: f32, attack_range: f32, detection_range: f32) -> Self {
        if distance <= attack_range {
            AiState::Attacking
        } else if distance <= detection_range {
            AiState::Chasing
        } else {
            AiState::Idle
        }
    }
}

#[derive(Component, Debug)]
pub struct EnemyAi {
    pub state: AiState,
    pub detection_range: f32,
    pub attack_range: f32,
    /// Countdown until the next strike is allowed
    pub attack_cooldown_timer: f32,
}

impl EnemyAi {
    pub fn new(attack_range: f32, detection_range: f32) -> Self {
        Self {
            state: AiState::Idle,
            detection_range,
            attack_range,
            attack_cooldown_timer: 0.0,
        }
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown_timer <= 0.0
    }
}

/// Inserted on an enemy when it dies. The entity is frozen while the grace
/// timer runs (death animation window), then removed from the simulation.
#[derive(Component, Debug)]
pub struct Dying {
    pub timer: f32,
}

/// Inserted on the player when they die; counts down to the respawn.
#[derive(Component, Debug)]
pub struct Respawning {
    pub timer: f32,
}

/// Where the player reappears after death.
#[derive(Component, Debug)]
pub struct RespawnPoint(pub Vec2);

/// Horizontal offset of the weapon anchor from the player's center,
/// mirrored when facing left.
pub const WEAPON_PIVOT_OFFSET: f32 = 12.0;

/// Weapon anchor child of the player; rotates during a swing.
#[derive(Component, Debug)]
pub struct WeaponPivot;

/// The visible blade sprite hanging off the pivot.
#[derive(Component, Debug)]
pub struct WeaponSprite;

/// One melee swing in progress, inserted on the player when an attack
/// command is accepted and removed when the duration elapses. A new attack
/// command is ignored while this component is present.
#[derive(Component, Debug)]
pub struct ActiveSwing {
    pub elapsed: f32,
    pub duration: f32,
    /// World position of the weapon pivot at swing start
    pub origin: Vec2,
    pub start_angle: f32,
    pub end_angle: f32,
    /// Set once the single mid-swing hit sample has run
    pub has_struck: bool,
    /// Enemies already damaged by this swing
    pub hits: EntityHashSet,
}

/// The strike sample fires the first tick progress falls in this window.
const STRIKE_WINDOW: (f32, f32) = (0.4, 0.6);

impl ActiveSwing {
    pub fn new(origin: Vec2, start_angle: f32, end_angle: f32, duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            origin,
            start_angle,
            end_angle,
            has_struck: false,
            hits: EntityHashSet::default(),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated blade angle in degrees for the current progress.
    pub fn current_angle(&self) -> f32 {
        self.start_angle + (self.end_angle - self.start_angle) * self.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// True exactly once: the first time progress is inside the strike
    /// window. Later ticks inside the window return false.
    pub fn take_strike(&mut self) -> bool {
        let p = self.progress();
        if self.has_struck || p < STRIKE_WINDOW.0 || p > STRIKE_WINDOW.1 {
            return false;
        }
        self.has_struck = true;
        true
    }

    /// Record a hit against an enemy. Returns false if this swing already
    /// damaged that entity.
    pub fn register_hit(&mut self, entity: Entity) -> bool {
        self.hits.insert(entity)
    }
}

/// Start/end blade angles for a swing, in degrees. The base angle comes
/// from the aim direction; the sweep order flips with facing so the arc
/// always travels bottom-to-top relative to where the player looks.
pub fn swing_angles(aim: Vec2, facing: Facing, half_spread: f32) -> (f32, f32) {
    let base = aim.y.atan2(aim.x).to_degrees();
    match facing {
        Facing::Right => (base - half_spread, base + half_spread),
        Facing::Left => (base + half_spread, base - half_spread),
    }
}
