//! Rules-core types shared by the scheduler and the round controller

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// What a spawned actor does to the score on pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Increases score by its magnitude (salvage part, droplet)
    Reward,
    /// Decreases score by its magnitude (asteroid, rock)
    Hazard,
}

/// Current phase of the round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Normal play: spawning runs, collisions score
    Active,
    /// End trigger fired this tick; terminal message is available
    Ending,
    /// Waiting out the restart delay, everything frozen
    Cooldown,
}

/// How the round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// Everything the host engine needs to materialize one spawned actor.
///
/// Immutable once produced; consumed exactly once by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDescriptor {
    pub kind: EntityKind,
    /// Entry position on the spawn edge
    pub pos: Vec2,
    /// Travel velocity across the playfield (pixels per second)
    pub vel: Vec2,
    /// Signed scoring value: reward value or hazard damage, always positive
    pub magnitude: i32,
    /// Visual scale for the sprite
    pub scale: f32,
    /// Sprite key the host uses to look up the texture
    pub sprite: String,
}

/// End-of-round message for the host to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalMessage {
    /// Headline ("Amazing! you cleaned the space", "You lose", ...)
    pub headline: String,
    /// Final score line shown under the headline
    pub detail: String,
    /// CSS color hint for the headline
    pub color: String,
}

/// RNG state wrapper so a round can be reproduced from its seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}
