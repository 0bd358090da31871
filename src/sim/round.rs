//! Round lifecycle controller
//!
//! Owns the phase machine, the optional countdown, and the once-only end
//! trigger. The host engine forwards collision and 1 Hz tick events here and
//! reads back spawn descriptors and HUD text.
//!
//! Phase cycle (no terminal state; it loops for the life of the process):
//!
//! ```text
//! Active --(threshold or timer breach, first time only)--> Ending
//! Ending --(next tick)--> Cooldown
//! Cooldown --(restart delay elapsed)--> Active (score, timer, guard reset)
//! ```

use glam::Vec2;

use super::score::ScoreTracker;
use super::spawn::SpawnScheduler;
use super::state::{EntityKind, Outcome, RoundPhase, SpawnDescriptor, TerminalMessage};
use crate::tuning::{ConfigError, GameConfig};

/// One parameterized rules machine driving either mini-game
#[derive(Debug, Clone)]
pub struct RoundController {
    cfg: GameConfig,
    viewport: Vec2,
    score: ScoreTracker,
    scheduler: SpawnScheduler,
    phase: RoundPhase,
    /// Seconds left in the round (timer variant only)
    time_left: Option<u32>,
    /// Once-only guard: set when the end trigger fires, cleared on restart
    end_triggered: bool,
    /// Ticks until the pending restart fires
    cooldown_ticks: u32,
    outcome: Option<Outcome>,
    terminal: Option<TerminalMessage>,
}

impl RoundController {
    pub fn new(cfg: GameConfig, seed: u64, viewport: Vec2) -> Result<Self, ConfigError> {
        cfg.validate()?;
        log::info!("round controller for {} (seed {seed})", cfg.name);
        Ok(Self {
            time_left: cfg.round_seconds,
            viewport,
            score: ScoreTracker::new(),
            scheduler: SpawnScheduler::new(seed),
            phase: RoundPhase::Active,
            end_triggered: false,
            cooldown_ticks: 0,
            outcome: None,
            terminal: None,
            cfg,
        })
    }

    /// Host reports two tracked actors overlapped.
    ///
    /// Ignored outside Active play (the actor is already being destroyed by
    /// the engine; there is nothing left to score). Returns the current score.
    pub fn on_collision(&mut self, kind: EntityKind, magnitude: i32) -> i32 {
        if self.phase != RoundPhase::Active {
            return self.score.value();
        }
        let delta = match kind {
            EntityKind::Reward => magnitude,
            EntityKind::Hazard => -magnitude,
        };
        let score = self.score.apply_delta(delta);
        log::debug!("collision {kind:?} {magnitude} -> score {score}");
        self.evaluate_termination();
        score
    }

    /// 1 Hz rules tick: advances the countdown while Active, the restart
    /// delay otherwise.
    pub fn on_tick(&mut self) {
        match self.phase {
            RoundPhase::Active => {
                if let Some(t) = self.time_left.as_mut() {
                    *t = t.saturating_sub(1);
                }
                self.evaluate_termination();
            }
            RoundPhase::Ending | RoundPhase::Cooldown => {
                self.phase = RoundPhase::Cooldown;
                self.cooldown_ticks = self.cooldown_ticks.saturating_sub(1);
                if self.cooldown_ticks == 0 {
                    self.restart();
                }
            }
        }
    }

    /// Ask for this tick's spawn. None outside Active play.
    pub fn spawn_tick(&mut self) -> Option<SpawnDescriptor> {
        if self.phase != RoundPhase::Active {
            return None;
        }
        Some(self.scheduler.draw(&self.cfg, self.viewport))
    }

    /// Check win/lose/timeout conditions and end the round if one holds.
    ///
    /// Fires at most once per round; re-evaluating after the trigger (or
    /// while Ending/Cooldown) is a silent no-op, never an error.
    pub fn evaluate_termination(&mut self) {
        if self.end_triggered {
            return;
        }
        let score = self.score.value();
        let loss_hit = self.cfg.loss_threshold.is_some_and(|l| score <= l);
        let win_hit = score >= self.cfg.win_threshold;
        let time_up = self.time_left == Some(0);
        if !(loss_hit || win_hit || time_up) {
            return;
        }

        // Classified at trigger time, whichever condition fired
        let outcome = if score < self.cfg.win_threshold {
            Outcome::Lose
        } else {
            Outcome::Win
        };

        self.end_triggered = true;
        self.phase = RoundPhase::Ending;
        self.cooldown_ticks = self.cfg.restart_delay_ticks;
        self.outcome = Some(outcome);

        let (headline, color) = match outcome {
            Outcome::Win => (self.cfg.win_text.clone(), self.cfg.win_color.clone()),
            Outcome::Lose => (self.cfg.lose_text.clone(), self.cfg.lose_color.clone()),
        };
        self.terminal = Some(TerminalMessage {
            headline,
            detail: format!("Final Score: {score}"),
            color,
        });
        log::info!("round over: {outcome:?} at score {score}");
    }

    /// Back to a fresh round
    fn restart(&mut self) {
        log::info!("restarting {}", self.cfg.name);
        self.score.reset();
        self.time_left = self.cfg.round_seconds;
        self.end_triggered = false;
        self.outcome = None;
        self.terminal = None;
        self.phase = RoundPhase::Active;
    }

    /// Host viewport changed (browser resize)
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.score.value()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    /// End-of-round message, present from Ending until restart
    pub fn terminal_message(&self) -> Option<&TerminalMessage> {
        self.terminal.as_ref()
    }

    /// HUD score line
    pub fn score_text(&self) -> String {
        if self.cfg.show_target_in_score {
            format!("Score: {} / {}", self.score.value(), self.cfg.win_threshold)
        } else {
            format!("Score: {}", self.score.value())
        }
    }

    /// HUD countdown line (timer variant only)
    pub fn time_text(&self) -> Option<String> {
        self.time_left.map(|t| format!("Time: {t}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    fn astro() -> RoundController {
        RoundController::new(GameConfig::astro_salvage(), 12345, VIEWPORT).unwrap()
    }

    fn water() -> RoundController {
        RoundController::new(GameConfig::water_rush(), 12345, VIEWPORT).unwrap()
    }

    #[test]
    fn test_threshold_win_at_exactly_300() {
        let mut ctrl = astro();

        for _ in 0..29 {
            ctrl.on_collision(EntityKind::Reward, 10);
        }
        assert_eq!(ctrl.score(), 290);
        assert_eq!(ctrl.phase(), RoundPhase::Active);

        ctrl.on_collision(EntityKind::Reward, 10);
        assert_eq!(ctrl.score(), 300);
        assert_eq!(ctrl.phase(), RoundPhase::Ending);
        assert_eq!(ctrl.outcome(), Some(Outcome::Win));

        let msg = ctrl.terminal_message().unwrap();
        assert!(msg.headline.contains("cleaned the space"));
        assert_eq!(msg.detail, "Final Score: 300");
        assert_eq!(msg.color, "#006400");
    }

    #[test]
    fn test_threshold_loss_at_minus_100() {
        let mut ctrl = astro();

        for _ in 0..3 {
            ctrl.on_collision(EntityKind::Hazard, 30);
        }
        assert_eq!(ctrl.score(), -90);
        assert_eq!(ctrl.phase(), RoundPhase::Active);

        ctrl.on_collision(EntityKind::Hazard, 10);
        assert_eq!(ctrl.phase(), RoundPhase::Ending);
        assert_eq!(ctrl.outcome(), Some(Outcome::Lose));
        assert_eq!(ctrl.terminal_message().unwrap().detail, "Final Score: -100");
    }

    #[test]
    fn test_timer_expiry_is_a_loss_below_target() {
        let mut ctrl = water();
        assert_eq!(ctrl.time_text().as_deref(), Some("Time: 60"));

        for _ in 0..59 {
            ctrl.on_tick();
        }
        assert_eq!(ctrl.phase(), RoundPhase::Active);
        assert_eq!(ctrl.time_text().as_deref(), Some("Time: 1"));

        ctrl.on_tick();
        assert_eq!(ctrl.phase(), RoundPhase::Ending);
        assert_eq!(ctrl.outcome(), Some(Outcome::Lose));

        let msg = ctrl.terminal_message().unwrap();
        assert_eq!(msg.headline, "You lose");
        assert_eq!(msg.detail, "Final Score: 0");
    }

    #[test]
    fn test_timer_expiry_is_a_win_at_target() {
        let mut ctrl = water();
        for _ in 0..20 {
            ctrl.on_collision(EntityKind::Reward, 10);
        }
        // 200 is the win threshold, so the unified machine ends the round
        // as soon as the score reaches it
        assert_eq!(ctrl.phase(), RoundPhase::Ending);
        assert_eq!(ctrl.outcome(), Some(Outcome::Win));
        assert_eq!(ctrl.terminal_message().unwrap().headline, "You win");
    }

    #[test]
    fn test_end_trigger_is_idempotent() {
        let mut ctrl = astro();
        ctrl.on_collision(EntityKind::Hazard, 100);
        assert_eq!(ctrl.phase(), RoundPhase::Ending);

        let first = ctrl.terminal_message().unwrap().clone();
        for _ in 0..5 {
            ctrl.evaluate_termination();
        }
        assert_eq!(ctrl.terminal_message(), Some(&first));
        assert_eq!(ctrl.outcome(), Some(Outcome::Lose));
    }

    #[test]
    fn test_score_frozen_outside_active() {
        let mut ctrl = astro();
        ctrl.on_collision(EntityKind::Hazard, 100);
        assert_eq!(ctrl.score(), -100);

        // Further collisions (actors still in flight when the round ended)
        // must not move the score
        assert_eq!(ctrl.on_collision(EntityKind::Reward, 10), -100);
        ctrl.on_tick();
        assert_eq!(ctrl.on_collision(EntityKind::Hazard, 30), -100);
        assert_eq!(ctrl.score(), -100);
    }

    #[test]
    fn test_spawning_halts_when_round_ends() {
        let mut ctrl = astro();
        assert!(ctrl.spawn_tick().is_some());

        ctrl.on_collision(EntityKind::Reward, 300);
        assert!(ctrl.spawn_tick().is_none());
        ctrl.on_tick();
        assert!(ctrl.spawn_tick().is_none());
    }

    #[test]
    fn test_restart_after_fixed_delay() {
        let mut ctrl = water();
        for _ in 0..60 {
            ctrl.on_tick();
        }
        assert_eq!(ctrl.phase(), RoundPhase::Ending);

        // Restart delay is 5 ticks; the round must stay down for the first 4
        for _ in 0..4 {
            ctrl.on_tick();
            assert_eq!(ctrl.phase(), RoundPhase::Cooldown);
        }
        ctrl.on_tick();

        assert_eq!(ctrl.phase(), RoundPhase::Active);
        assert_eq!(ctrl.score(), 0);
        assert_eq!(ctrl.time_left(), Some(60));
        assert!(ctrl.terminal_message().is_none());
        assert!(ctrl.outcome().is_none());

        // Guard is cleared: a fresh breach ends the new round too
        for _ in 0..60 {
            ctrl.on_tick();
        }
        assert_eq!(ctrl.phase(), RoundPhase::Ending);
    }

    #[test]
    fn test_score_text_formats() {
        let mut ctrl = astro();
        assert_eq!(ctrl.score_text(), "Score: 0 / 300");
        ctrl.on_collision(EntityKind::Reward, 10);
        assert_eq!(ctrl.score_text(), "Score: 10 / 300");

        let water = water();
        assert_eq!(water.score_text(), "Score: 0");
        assert_eq!(water.time_text().as_deref(), Some("Time: 60"));
        assert_eq!(astro().time_text(), None);
    }

    #[test]
    fn test_outcomes_are_mutually_exclusive() {
        // Every possible trigger score classifies as exactly one outcome
        for score in [-100i32, -10, 0, 150, 299, 300, 400] {
            let mut ctrl = astro();
            ctrl.on_collision(
                if score >= 0 {
                    EntityKind::Reward
                } else {
                    EntityKind::Hazard
                },
                score.abs(),
            );
            if let Some(outcome) = ctrl.outcome() {
                let expect = if score < 300 { Outcome::Lose } else { Outcome::Win };
                assert_eq!(outcome, expect, "score {score}");
            }
        }
    }
}
