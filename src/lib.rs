//! Astro Rush - two arcade mini-games on one deterministic rules core
//!
//! Core modules:
//! - `sim`: Deterministic game rules (spawning, scoring, round lifecycle)
//! - `tuning`: Data-driven game balance (the two game presets)
//! - `platform`: Timer scheduling primitives for host wiring
//! - `web`: wasm-bindgen bindings consumed by the browser host engine
//!
//! The host engine owns rendering, physics, input, and audio. This crate
//! only decides what to spawn, how to score, and when a round ends.

pub mod platform;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use sim::{EntityKind, Outcome, RoundController, RoundPhase, SpawnDescriptor};
pub use tuning::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Rules cadence: spawn and countdown timers fire once per second
    pub const RULE_TICK_MS: u32 = 1000;

    /// Lateral spawn margin from each playfield edge (pixels).
    /// Keeps spawned actors from clipping the viewport border.
    pub const SPAWN_EDGE_MARGIN: f32 = 50.0;

    /// Ticks spent in Cooldown before the round restarts (5 seconds at 1 Hz)
    pub const RESTART_DELAY_TICKS: u32 = 5;

    /// Travel speed of spawned actors (pixels per second, both games)
    pub const ENTITY_SPEED: f32 = 200.0;
}
