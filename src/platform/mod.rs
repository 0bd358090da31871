//! Host scheduling primitives
//!
//! The rules core never blocks and never owns a clock; hosts drive it from
//! their own frame loop. `Timers` is the deterministic scheduling service the
//! wiring layers use for that: `every`/`after` register cancellable timers
//! counted in rule ticks, and `advance` reports which ones fired.
//!
//! No callbacks are stored. The caller matches fired [`TimerId`]s to actions,
//! so tearing down a game is just dropping the wheel: nothing can mutate
//! state afterwards.

/// Handle to a pending timer; pass back to [`Timers::cancel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
enum Repeat {
    Once,
    Every(u32),
}

#[derive(Debug, Clone)]
struct Entry {
    id: TimerId,
    remaining: u32,
    repeat: Repeat,
}

/// Deterministic timer wheel counted in rule ticks
#[derive(Debug, Clone, Default)]
pub struct Timers {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, remaining: u32, repeat: Repeat) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            remaining,
            repeat,
        });
        id
    }

    /// Fire every `interval_ticks` ticks until cancelled. Intervals are
    /// clamped to at least one tick.
    pub fn every(&mut self, interval_ticks: u32) -> TimerId {
        let interval = interval_ticks.max(1);
        self.register(interval, Repeat::Every(interval))
    }

    /// Fire once after `delay_ticks` ticks
    pub fn after(&mut self, delay_ticks: u32) -> TimerId {
        self.register(delay_ticks.max(1), Repeat::Once)
    }

    /// Invalidate a pending timer. Returns false if it already fired (for a
    /// one-shot) or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            log::debug!("cancel of stale timer {id:?}");
            return false;
        }
        true
    }

    /// Number of timers still pending
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Advance the wheel by `ticks` and return the timers that fired, in
    /// registration order per tick.
    pub fn advance(&mut self, ticks: u32) -> Vec<TimerId> {
        let mut fired = Vec::new();
        for _ in 0..ticks {
            for entry in &mut self.entries {
                entry.remaining -= 1;
                if entry.remaining == 0 {
                    fired.push(entry.id);
                    if let Repeat::Every(interval) = entry.repeat {
                        entry.remaining = interval;
                    }
                }
            }
            self.entries.retain(|e| e.remaining > 0);
        }
        fired
    }
}
