//! Deterministic rules module
//!
//! All game-rule logic lives here. This module must be pure and deterministic:
//! - Fixed 1 Hz rule cadence
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host engine feeds collision and tick events in; spawn descriptors and
//! HUD text come out.

pub mod round;
pub mod score;
pub mod spawn;
pub mod state;

pub use round::RoundController;
pub use score::ScoreTracker;
pub use spawn::SpawnScheduler;
pub use state::{EntityKind, Outcome, RngState, RoundPhase, SpawnDescriptor, TerminalMessage};
