//! Mission timer shown as a large `HH:MM:SS` label.

use std::time::{Duration, Instant};

use chrono::TimeDelta;

/// Largest value the label can show.
const MAX_DISPLAY_SECS: i64 = 99 * 3600 + 59 * 60 + 59;

/// Format a duration as `HH:MM:SS`, truncating fractional seconds.
///
/// Saturates at `99:59:59` so the label keeps its width.
pub fn format_hms(elapsed: Duration) -> String {
    let delta = TimeDelta::from_std(elapsed).unwrap_or(TimeDelta::MAX);
    let total = delta.num_seconds().clamp(0, MAX_DISPLAY_SECS);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Wall-clock time since launch.
///
/// The label is only recomputed on [`refresh`](Self::refresh), which the
/// station calls from its timer repeater; between refreshes it keeps the
/// previous text.
#[derive(Debug, Clone)]
pub struct MissionTimer {
    started_at: Option<Instant>,
    stopped_after: Option<Duration>,
    label: String,
}

impl Default for MissionTimer {
    fn default() -> Self {
        Self {
            started_at: None,
            stopped_after: None,
            label: format_hms(Duration::ZERO),
        }
    }
}

impl MissionTimer {
    /// Restart from zero at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.stopped_after = None;
        self.label = format_hms(Duration::ZERO);
    }

    /// Freeze the timer. The label keeps its last refreshed value.
    pub fn stop(&mut self, now: Instant) {
        if self.is_running() {
            self.stopped_after = Some(self.elapsed(now));
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_after.is_none()
    }

    /// Elapsed time as of `now`, or the frozen value once stopped.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.started_at, self.stopped_after) {
            (_, Some(frozen)) => frozen,
            (Some(start), None) => now.saturating_duration_since(start),
            (None, None) => Duration::ZERO,
        }
    }

    /// Recompute the label from the stored start instant. No-op when stopped.
    pub fn refresh(&mut self, now: Instant) {
        if self.is_running() {
            self.label = format_hms(self.elapsed(now));
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
