use serde::Serialize;

use crate::memory::layout::clock::TICKS_PER_SECOND;

/// In-game clock, in raw 10 MHz engine ticks.
///
/// The game accumulates a running counter plus separate counters for
/// time spent in cutscenes, the inventory screen, and pause; the
/// speedrun-relevant time is the running counter minus the three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameTimer {
    pub game_elapsed_ticks: u64,
    pub demo_spending_ticks: u64,
    pub inventory_spending_ticks: u64,
    pub pause_spending_ticks: u64,
}

impl GameTimer {
    /// Measured play time in ticks.
    pub fn measured_ticks(&self) -> u64 {
        self.game_elapsed_ticks
            .saturating_sub(self.demo_spending_ticks)
            .saturating_sub(self.inventory_spending_ticks)
            .saturating_sub(self.pause_spending_ticks)
    }

    /// Measured play time in seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.measured_ticks() as f64 / TICKS_PER_SECOND as f64
    }

    /// Format as `H:MM:SS.mmm` for display output.
    pub fn formatted(&self) -> String {
        let total_millis = self.measured_ticks() / (TICKS_PER_SECOND / 1000);
        let millis = total_millis % 1000;
        let seconds = (total_millis / 1000) % 60;
        let minutes = (total_millis / 60_000) % 60;
        let hours = total_millis / 3_600_000;
        format!("{hours}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}
