//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A request to damage a target, consumed by the damage pipeline.
#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
}

impl Message for DamageEvent {}

/// Emitted whenever the damage pipeline mutates an actor's health.
/// Consumed by the UI health bar.
#[derive(Debug)]
pub struct HealthChangedEvent {
    pub entity: Entity,
    pub current: f32,
    pub max: f32,
}

impl Message for HealthChangedEvent {}

/// Fire-and-forget hit-reaction trigger for presentation (flash/animation).
#[derive(Debug)]
pub struct HitReactionEvent {
    pub entity: Entity,
}

impl Message for HitReactionEvent {}

/// Emitted once when an actor's health reaches zero.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

#[derive(Debug)]
pub struct PlayerDiedEvent;

impl Message for PlayerDiedEvent {}

#[derive(Debug)]
pub struct PlayerRespawnedEvent;

impl Message for PlayerRespawnedEvent {}
