//! Data-driven game balance
//!
//! Everything that differs between the two mini-games lives here, so the
//! rules core stays one parameterized machine. Configs serialize to JSON so
//! a host can ship tuning as data instead of recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::{ENTITY_SPEED, RESTART_DELAY_TICKS, SPAWN_EDGE_MARGIN};

/// Which viewport edge actors enter from, and therefore which axis the
/// lateral spawn coordinate runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    /// Actors fall straight down; lateral coordinate is x (Water Rush)
    Top,
    /// Actors scroll leftward; lateral coordinate is y (Astro Salvage)
    Right,
}

/// Explicit reward/hazard spawn odds.
///
/// The original games buried this as `Between(0, 10) > 3`; keeping it as a
/// named table makes the 70/30 split a testable configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnWeights {
    pub reward: f32,
    pub hazard: f32,
}

impl SpawnWeights {
    /// Probability that a draw produces a Reward
    pub fn reward_share(&self) -> f32 {
        self.reward / (self.reward + self.hazard)
    }
}

/// One hazard flavor: sprite, visual scale, damage on hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardTier {
    pub sprite: String,
    pub scale: f32,
    pub damage: i32,
}

impl HazardTier {
    fn new(sprite: &str, scale: f32, damage: i32) -> Self {
        Self {
            sprite: sprite.to_string(),
            scale,
            damage,
        }
    }
}

/// Full balance sheet for one mini-game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    pub edge: SpawnEdge,
    pub weights: SpawnWeights,

    /// Score gained per collected reward
    pub reward_value: i32,
    pub reward_sprite: String,
    pub reward_scale: f32,
    pub hazard_tiers: Vec<HazardTier>,

    /// Travel speed of spawned actors (pixels per second)
    pub entity_speed: f32,
    /// Lateral margin kept clear on both playfield edges
    pub edge_margin: f32,

    /// Score at or above which the round is won
    pub win_threshold: i32,
    /// Score at or below which the round is lost (None: timer-only loss)
    pub loss_threshold: Option<i32>,
    /// Countdown length in seconds (None: threshold-only game)
    pub round_seconds: Option<u32>,

    /// Render the score as "Score: <v> / <win_threshold>"
    pub show_target_in_score: bool,
    /// Cooldown ticks before the round restarts
    pub restart_delay_ticks: u32,

    pub win_text: String,
    pub win_color: String,
    pub lose_text: String,
    pub lose_color: String,
}

impl GameConfig {
    /// Astro Salvage: side-scrolling salvage run, pure score thresholds
    pub fn astro_salvage() -> Self {
        Self {
            name: "astro-salvage".to_string(),
            edge: SpawnEdge::Right,
            weights: SpawnWeights {
                reward: 0.7,
                hazard: 0.3,
            },
            reward_value: 10,
            reward_sprite: "part1".to_string(),
            reward_scale: 0.55,
            hazard_tiers: vec![
                HazardTier::new("smallAstro", 0.6, 10),
                HazardTier::new("medAstro", 0.9, 20),
                HazardTier::new("bigAstro", 1.2, 30),
            ],
            entity_speed: ENTITY_SPEED,
            edge_margin: SPAWN_EDGE_MARGIN,
            win_threshold: 300,
            loss_threshold: Some(-100),
            round_seconds: None,
            show_target_in_score: true,
            restart_delay_ticks: RESTART_DELAY_TICKS,
            win_text: "Amazing! you cleaned the space".to_string(),
            win_color: "#006400".to_string(),
            lose_text: "Oh no! your ship was destroyed".to_string(),
            lose_color: "#FF0000".to_string(),
        }
    }

    /// Water Rush: top-down droplet catch against a 60-second clock
    pub fn water_rush() -> Self {
        Self {
            name: "water-rush".to_string(),
            edge: SpawnEdge::Top,
            weights: SpawnWeights {
                reward: 0.7,
                hazard: 0.3,
            },
            reward_value: 10,
            reward_sprite: "droplet".to_string(),
            reward_scale: 0.2,
            hazard_tiers: vec![HazardTier::new("rock", 0.14, 10)],
            entity_speed: ENTITY_SPEED,
            edge_margin: SPAWN_EDGE_MARGIN,
            win_threshold: 200,
            loss_threshold: None,
            round_seconds: Some(60),
            show_target_in_score: false,
            restart_delay_ticks: RESTART_DELAY_TICKS,
            win_text: "You win".to_string(),
            win_color: "green".to_string(),
            lose_text: "You lose".to_string(),
            lose_color: "#FF0000".to_string(),
        }
    }

    /// Look up a preset by name (used by the wasm constructor)
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "astro-salvage" => Some(Self::astro_salvage()),
            "water-rush" => Some(Self::water_rush()),
            _ => None,
        }
    }

    /// Reject configs the rules machine cannot run sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(loss) = self.loss_threshold {
            if loss >= self.win_threshold {
                return Err(ConfigError::ThresholdOrder {
                    loss,
                    win: self.win_threshold,
                });
            }
        }
        if self.hazard_tiers.is_empty() {
            return Err(ConfigError::NoHazardTiers);
        }
        if self.weights.reward <= 0.0 || self.weights.hazard < 0.0 {
            return Err(ConfigError::BadWeights);
        }
        Ok(())
    }
}

/// Config validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Loss threshold must sit strictly below the win threshold
    ThresholdOrder { loss: i32, win: i32 },
    /// At least one hazard tier is required
    NoHazardTiers,
    /// Reward weight must be positive, hazard weight non-negative
    BadWeights,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ThresholdOrder { loss, win } => {
                write!(f, "loss threshold {loss} must be below win threshold {win}")
            }
            ConfigError::NoHazardTiers => write!(f, "hazard tier list is empty"),
            ConfigError::BadWeights => write!(f, "spawn weights must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(GameConfig::astro_salvage().validate().is_ok());
        assert!(GameConfig::water_rush().validate().is_ok());
    }

    #[test]
    fn test_threshold_order_rejected() {
        let mut cfg = GameConfig::astro_salvage();
        cfg.loss_threshold = Some(300);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ThresholdOrder { loss: 300, win: 300 })
        );
    }

    #[test]
    fn test_by_name() {
        assert!(GameConfig::by_name("astro-salvage").is_some());
        assert!(GameConfig::by_name("water-rush").is_some());
        assert!(GameConfig::by_name("pong").is_none());
    }

    #[test]
    fn test_config_ships_as_json() {
        let cfg = GameConfig::water_rush();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_reward_share() {
        let w = SpawnWeights {
            reward: 0.7,
            hazard: 0.3,
        };
        assert!((w.reward_share() - 0.7).abs() < 1e-6);
    }
}
