//! Browser host bindings
//!
//! The Phaser scene owns sprites, physics groups, input, and audio; it binds
//! its overlap callbacks and 1 Hz timers to the methods here and materializes
//! whatever `spawn_tick` hands back. Descriptors and terminal messages cross
//! the boundary as JSON strings.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::sim::{EntityKind, RoundController, RoundPhase};
use crate::tuning::GameConfig;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// One running mini-game, owned by the browser host
#[wasm_bindgen]
pub struct WebGame {
    ctrl: RoundController,
}

#[wasm_bindgen]
impl WebGame {
    /// `mode` is a preset name ("astro-salvage" or "water-rush");
    /// `seed` is optional, defaulting to the clock for casual play.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, width: f32, height: f32, seed: Option<f64>) -> Result<WebGame, JsError> {
        let cfg = GameConfig::by_name(mode)
            .ok_or_else(|| JsError::new(&format!("unknown game mode: {mode}")))?;
        let seed = seed.unwrap_or_else(js_sys::Date::now) as u64;
        let ctrl = RoundController::new(cfg, seed, Vec2::new(width, height))
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WebGame { ctrl })
    }

    /// This tick's spawn as a JSON descriptor, or undefined outside active
    /// play. Consumed exactly once: the scene creates the actor and forgets.
    pub fn spawn_tick(&mut self) -> Result<Option<String>, JsError> {
        self.ctrl
            .spawn_tick()
            .map(|d| serde_json::to_string(&d).map_err(|e| JsError::new(&e.to_string())))
            .transpose()
    }

    /// The scene's overlap callback: `kind` is "reward" or "hazard",
    /// `magnitude` the value stored on the actor. Returns the current score.
    pub fn on_collision(&mut self, kind: &str, magnitude: i32) -> Result<i32, JsError> {
        let kind = match kind {
            "reward" => EntityKind::Reward,
            "hazard" => EntityKind::Hazard,
            other => return Err(JsError::new(&format!("unknown entity kind: {other}"))),
        };
        Ok(self.ctrl.on_collision(kind, magnitude))
    }

    /// 1 Hz rules tick (countdown and restart delay)
    pub fn on_tick(&mut self) {
        self.ctrl.on_tick();
    }

    /// Interval in milliseconds the host's timers should drive
    /// `spawn_tick` and `on_tick` at
    pub fn rule_tick_ms() -> u32 {
        crate::consts::RULE_TICK_MS
    }

    /// Browser resize
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.ctrl.set_viewport(Vec2::new(width, height));
    }

    /// Whether the scene should keep physics and spawning running
    pub fn is_active(&self) -> bool {
        self.ctrl.phase() == RoundPhase::Active
    }

    pub fn score_text(&self) -> String {
        self.ctrl.score_text()
    }

    pub fn time_text(&self) -> Option<String> {
        self.ctrl.time_text()
    }

    /// End-of-round message as JSON (headline, detail, color), present from
    /// the end trigger until the automatic restart
    pub fn terminal_message(&self) -> Result<Option<String>, JsError> {
        self.ctrl
            .terminal_message()
            .map(|m| serde_json::to_string(m).map_err(|e| JsError::new(&e.to_string())))
            .transpose()
    }
}
