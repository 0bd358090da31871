//! Astro Rush headless demo
//!
//! Runs both mini-games without a host engine: an autoplay policy stands in
//! for the player, catching most rewards and clipping the odd hazard, and the
//! HUD lines are printed to stdout. Useful for eyeballing balance tweaks.

use std::error::Error;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use astro_rush::platform::Timers;
use astro_rush::sim::{EntityKind, RoundController, RoundPhase};
use astro_rush::tuning::GameConfig;

/// Autoplay pickup odds: the demo player is decent but not perfect
const CATCH_REWARD: f32 = 0.6;
const HIT_HAZARD: f32 = 0.2;

/// Bail out if a round somehow never cycles
const MAX_TICKS: u32 = 5_000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let viewport = Vec2::new(1280.0, 720.0);
    for cfg in [GameConfig::astro_salvage(), GameConfig::water_rush()] {
        run_demo(cfg, viewport)?;
    }
    Ok(())
}

/// Play one full round cycle (Active -> Ending -> Cooldown -> Active)
fn run_demo(cfg: GameConfig, viewport: Vec2) -> Result<(), Box<dyn Error>> {
    let name = cfg.name.clone();
    println!("=== {name} ===");

    let mut ctrl = RoundController::new(cfg, 0xA57_0415, viewport)?;
    let mut player = Pcg32::seed_from_u64(7);

    // Both originals drive spawning and the countdown from 1 Hz engine
    // timers; the demo does the same through the timer wheel
    let mut timers = Timers::new();
    let spawn_timer = timers.every(1);
    let rules_timer = timers.every(1);

    let mut ended = false;
    for tick in 0..MAX_TICKS {
        for id in timers.advance(1) {
            if id == spawn_timer {
                if let Some(d) = ctrl.spawn_tick() {
                    let pickup_chance = match d.kind {
                        EntityKind::Reward => CATCH_REWARD,
                        EntityKind::Hazard => HIT_HAZARD,
                    };
                    if player.random::<f32>() < pickup_chance {
                        ctrl.on_collision(d.kind, d.magnitude);
                    }
                }
            } else if id == rules_timer {
                ctrl.on_tick();
            }
        }

        if tick % 10 == 0 && ctrl.phase() == RoundPhase::Active {
            match ctrl.time_text() {
                Some(time) => println!("  {}  {}", ctrl.score_text(), time),
                None => println!("  {}", ctrl.score_text()),
            }
        }

        if !ended {
            if let Some(msg) = ctrl.terminal_message() {
                println!("  {} ({})", msg.headline, msg.color);
                println!("  {}", msg.detail);
                ended = true;
            }
        } else if ctrl.phase() == RoundPhase::Active {
            println!("  round restarted\n");
            return Ok(());
        }
    }

    Err(format!("{name}: round never cycled within {MAX_TICKS} ticks").into())
}
