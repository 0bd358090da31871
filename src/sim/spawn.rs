//! Spawn decisions
//!
//! A pure generator: every draw is independent, driven only by the seeded
//! RNG and the game config. Callable any number of times; no failure modes.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{EntityKind, RngState, SpawnDescriptor};
use crate::tuning::{GameConfig, SpawnEdge};

/// Decides what (if anything the controller asks for) enters the playfield
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    rng_state: RngState,
    rng: Pcg32,
}

impl SpawnScheduler {
    pub fn new(seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let rng = rng_state.to_rng();
        Self { rng_state, rng }
    }

    /// Seed this scheduler was built from
    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Produce one spawn descriptor.
    ///
    /// `viewport` is the current playfield size in pixels; the lateral
    /// coordinate is drawn uniformly inside the config's edge margins.
    pub fn draw(&mut self, cfg: &GameConfig, viewport: Vec2) -> SpawnDescriptor {
        let lateral_extent = match cfg.edge {
            SpawnEdge::Top => viewport.x,
            SpawnEdge::Right => viewport.y,
        };
        // Degenerate viewports (narrower than twice the margin) collapse the
        // band to its midline instead of producing an empty sample range
        let hi = (lateral_extent - cfg.edge_margin).max(cfg.edge_margin);
        let lateral = self.rng.random_range(cfg.edge_margin..=hi);

        let (pos, vel) = match cfg.edge {
            SpawnEdge::Top => (Vec2::new(lateral, 0.0), Vec2::new(0.0, cfg.entity_speed)),
            SpawnEdge::Right => (
                Vec2::new(viewport.x, lateral),
                Vec2::new(-cfg.entity_speed, 0.0),
            ),
        };

        if self.rng.random::<f32>() < cfg.weights.reward_share() {
            SpawnDescriptor {
                kind: EntityKind::Reward,
                pos,
                vel,
                magnitude: cfg.reward_value,
                scale: cfg.reward_scale,
                sprite: cfg.reward_sprite.clone(),
            }
        } else {
            let tier = &cfg.hazard_tiers[self.rng.random_range(0..cfg.hazard_tiers.len())];
            SpawnDescriptor {
                kind: EntityKind::Hazard,
                pos,
                vel,
                magnitude: tier.damage,
                scale: tier.scale,
                sprite: tier.sprite.clone(),
            }
        }
    }
}
