//! Statistics screen state: the report load and the "Roll Credits" reel.
//!
//! DESIGN
//! ======
//! The reel is driven by a requestAnimationFrame loop that lives outside the
//! reactive graph. Every start hands the loop a generation number; each frame
//! asks the reel whether its generation is still current before scrolling
//! and rescheduling. A stop, a restart, or an unmount makes older loops
//! stale, so two loops never advance the scroll at once.

#[cfg(test)]
#[path = "credits_test.rs"]
mod credits_test;

use crate::net::types::StatsReport;

/// Pixels advanced per animation frame.
pub const SCROLL_SPEED: f64 = 0.55;

/// Fallback when a fetch fails without a message of its own.
pub const STATS_LOAD_FAILED: &str = "Could not load stats.";

/// Report fetch progress. Loading, content, and error are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatsLoad {
    #[default]
    Loading,
    Loaded(StatsReport),
    Failed(String),
}

impl StatsLoad {
    /// Fold a fetch result into the load state.
    #[must_use]
    pub fn from_result<E: std::fmt::Display>(result: Result<StatsReport, E>) -> Self {
        match result {
            Ok(report) => Self::Loaded(report),
            Err(err) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    Self::Failed(STATS_LOAD_FAILED.to_owned())
                } else {
                    Self::Failed(message)
                }
            }
        }
    }
}

/// What the caller must do after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReelCommand {
    /// Schedule a new frame loop tagged with this generation.
    Start(u64),
    /// Nothing to schedule; the running loop will notice and exit.
    Stop,
}

/// Auto-scroll controller for the credits view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CreditsReel {
    playing: bool,
    generation: u64,
    /// Sub-pixel scroll position; `scrollTop` itself is an integer.
    offset: f64,
}

impl CreditsReel {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self) -> ReelCommand {
        if self.playing {
            self.halt();
            ReelCommand::Stop
        } else {
            self.playing = true;
            self.generation += 1;
            ReelCommand::Start(self.generation)
        }
    }

    /// Stop without starting; used on unmount.
    pub fn halt(&mut self) {
        self.playing = false;
        self.generation += 1;
    }

    /// Whether a loop started with `generation` should keep running.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.playing && self.generation == generation
    }

    /// Advance one frame given the element's observed `scrollTop` and return
    /// the value to write back.
    ///
    /// If the observed position drifted more than a pixel from ours, the user
    /// scrolled by hand and the reel continues from there.
    pub fn advance(&mut self, observed: i32) -> i32 {
        if (f64::from(observed) - self.offset.round()).abs() > 1.0 {
            self.offset = f64::from(observed);
        }
        self.offset += SCROLL_SPEED;
        // Offsets stay far below i32::MAX for any realistic document.
        #[allow(clippy::cast_possible_truncation)]
        let next = self.offset.round() as i32;
        next
    }
}

/// Button label for the reel toggle.
#[must_use]
pub fn reel_label(playing: bool) -> &'static str {
    if playing { "⏸ Pause" } else { "▶ Roll Credits" }
}
