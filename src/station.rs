//! The ground-station controller: all console state and the two periodic loops.
//!
//! [`GroundStation`] is UI-agnostic. The egui front end forwards button
//! presses to [`launch`](GroundStation::launch),
//! [`start_receiving`](GroundStation::start_receiving) and friends, calls
//! [`poll`](GroundStation::poll) once per frame, and renders from the getters.
//!
//! Two independent loops are driven from `poll`:
//!
//! * the **tick** loop (default 100 ms) advances the simulation while the
//!   receiving flag is set and reschedules itself;
//! * the **timer** loop (1 s) refreshes the `HH:MM:SS` label while the mission
//!   timer runs.
//!
//! Clearing the receiving flag never cancels a tick that is already queued. That
//! tick still fires, sees the flag cleared, and simply does not reschedule.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::StationConfig;
use crate::error::ConfigError;
use crate::data::gps::GpsPosition;
use crate::data::history::SampleHistory;
use crate::data::parachute::ParachuteStatus;
use crate::data::rocket::{RocketGlyph, RocketOrientation};
use crate::data::schedule::Repeater;
use crate::data::timer::MissionTimer;
use crate::source::{SimulatedSource, TelemetrySample, TelemetrySource};

pub struct GroundStation {
    config: StationConfig,
    source: Box<dyn TelemetrySource>,
    gps_rng: StdRng,

    // ── Loops ────────────────────────────────────────────────────────────────
    receiving: bool,
    tick_loop: Repeater,
    timer_loop: Repeater,
    tick_invocations: u64,

    // ── Display state ────────────────────────────────────────────────────────
    orientation: RocketOrientation,
    glyph: RocketGlyph,
    history: SampleHistory,
    latest: Option<TelemetrySample>,
    parachute: ParachuteStatus,
    gps: GpsPosition,
    timer: MissionTimer,
}

impl GroundStation {
    /// Create a station fed by a [`SimulatedSource`] built from `config`.
    ///
    /// Fails when `config` does not pass [`StationConfig::validate`].
    pub fn new(config: StationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => SimulatedSource::with_seed(config.ranges, seed),
            None => SimulatedSource::new(config.ranges),
        };
        Self::with_source(config, Box::new(source))
    }

    /// Create a station fed by an arbitrary telemetry source.
    pub fn with_source(
        config: StationConfig,
        source: Box<dyn TelemetrySource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let gps_rng = match config.seed {
            // Keep the GPS walk independent of the sensor stream.
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            tick_loop: Repeater::new(config.tick_period()),
            timer_loop: Repeater::new(config.timer_period()),
            gps: GpsPosition::from(config.gps_origin),
            config,
            source,
            gps_rng,
            receiving: false,
            tick_invocations: 0,
            orientation: RocketOrientation::default(),
            glyph: RocketGlyph::default(),
            history: SampleHistory::new(),
            latest: None,
            parachute: ParachuteStatus::default(),
            timer: MissionTimer::default(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // User actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw the segmented rocket, start a fresh recording session, mark the
    /// station as receiving and start the mission timer.
    ///
    /// The tick loop is not scheduled here; it starts with
    /// [`start_receiving`](Self::start_receiving). A loop that is already
    /// running keeps running.
    pub fn launch(&mut self, now: Instant) {
        log::info!(
            "launch at {} (source: {})",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.source.name()
        );
        self.glyph = RocketGlyph::Segmented;
        self.history.clear();
        self.latest = None;
        self.receiving = true;
        self.timer.start(now);
        self.timer_loop.fire_now(now);
    }

    /// Set the receiving flag and make a tick due immediately.
    pub fn start_receiving(&mut self, now: Instant) {
        log::info!("start receiving");
        self.receiving = true;
        self.tick_loop.fire_now(now);
    }

    /// Clear the receiving flag and freeze the mission timer.
    ///
    /// A tick that is already queued still fires once but records nothing.
    pub fn stop_receiving(&mut self, now: Instant) {
        log::info!("stop receiving after {} samples", self.history.len());
        self.receiving = false;
        self.timer.stop(now);
    }

    /// Log clearing is not supported; the history is kept.
    pub fn clear_log(&mut self) {
        log::debug!("clear log requested; not implemented");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loops
    // ─────────────────────────────────────────────────────────────────────────

    /// Fire every callback whose deadline has passed. Returns `true` if any
    /// displayed state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.tick_loop.take_due(now) {
            changed |= self.tick(now);
        }
        if self.timer_loop.take_due(now) {
            changed |= self.refresh_timer(now);
        }
        changed
    }

    /// Earliest pending deadline of either loop.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.tick_loop.next_due(), self.timer_loop.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// One simulation step. Returns `false` (and does not reschedule) when
    /// the receiving flag is cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tick_invocations += 1;
        if !self.receiving {
            log::debug!("tick skipped: not receiving");
            return false;
        }

        self.orientation.advance(self.config.rotation_step_deg);

        let sample = self.source.next_sample();
        self.history.push(&sample);
        self.latest = Some(sample);

        self.parachute =
            ParachuteStatus::from_altitude(sample.altitude, self.config.parachute_threshold_m);

        self.gps
            .random_walk(&mut self.gps_rng, self.config.gps_step_deg);

        log::trace!(
            "tick {}: angle={:.1} {:?} parachute={} gps=({:.6}, {:.6})",
            self.history.len(),
            self.orientation.degrees(),
            sample,
            self.parachute,
            self.gps.latitude,
            self.gps.longitude
        );

        self.tick_loop.reschedule(now);
        true
    }

    fn refresh_timer(&mut self, now: Instant) -> bool {
        if !self.timer.is_running() {
            return false;
        }
        self.timer.refresh(now);
        self.timer_loop.reschedule(now);
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn is_receiving(&self) -> bool {
        self.receiving
    }

    /// Whether a tick is queued (it may still be skipped when it fires).
    pub fn tick_pending(&self) -> bool {
        self.tick_loop.is_pending()
    }

    /// Number of times the tick callback fired, including skipped ones.
    pub fn tick_invocations(&self) -> u64 {
        self.tick_invocations
    }

    pub fn orientation(&self) -> RocketOrientation {
        self.orientation
    }

    pub fn glyph(&self) -> RocketGlyph {
        self.glyph
    }

    pub fn history(&self) -> &SampleHistory {
        &self.history
    }

    pub fn latest_sample(&self) -> Option<&TelemetrySample> {
        self.latest.as_ref()
    }

    pub fn parachute(&self) -> ParachuteStatus {
        self.parachute
    }

    pub fn gps(&self) -> GpsPosition {
        self.gps
    }

    pub fn timer(&self) -> &MissionTimer {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::SampleRange;
    use crate::data::history::Quantity;

    fn seeded() -> GroundStation {
        GroundStation::new(StationConfig {
            seed: Some(1),
            ..Default::default()
        })
        .unwrap()
    }

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn start_receiving_ticks_immediately_then_every_period() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.start_receiving(t0);
        assert!(st.poll(t0));
        assert_eq!(st.history().len(), 1);

        assert!(!st.poll(t0 + Duration::from_millis(50)));
        assert_eq!(st.history().len(), 1);

        assert!(st.poll(t0 + TICK));
        assert_eq!(st.history().len(), 2);
    }

    #[test]
    fn launch_alone_does_not_start_ticks() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.launch(t0);
        assert!(st.is_receiving());
        assert!(!st.tick_pending());
        st.poll(t0 + Duration::from_secs(5));
        assert!(st.history().is_empty());
        assert_eq!(st.glyph(), RocketGlyph::Segmented);
    }

    #[test]
    fn repeated_start_does_not_double_the_rate() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.start_receiving(t0);
        st.poll(t0);
        st.start_receiving(t0);
        st.poll(t0);
        assert_eq!(st.history().len(), 1);
    }

    #[test]
    fn parachute_follows_latest_altitude() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.start_receiving(t0);
        let mut now = t0;
        for _ in 0..200 {
            st.poll(now);
            let alt = st.history().latest(Quantity::Altitude).unwrap();
            let expected = if alt > 10.0 { "Ejected" } else { "Not Ejected" };
            assert_eq!(st.parachute().to_string(), expected);
            now += TICK;
        }
    }

    #[test]
    fn stop_allows_at_most_one_more_tick() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.start_receiving(t0);
        st.poll(t0);
        st.stop_receiving(t0);
        let fired_before = st.tick_invocations();
        let len_before = st.history().len();

        let mut now = t0;
        for _ in 0..50 {
            now += TICK;
            st.poll(now);
        }
        assert!(st.tick_invocations() - fired_before <= 1);
        assert_eq!(st.history().len(), len_before);
        assert!(!st.tick_pending());
    }

    #[test]
    fn launch_starts_fresh_history() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.start_receiving(t0);
        st.poll(t0);
        st.poll(t0 + TICK);
        st.launch(t0 + TICK);
        assert!(st.history().is_empty());
        st.poll(t0 + TICK * 2);
        assert_eq!(st.history().len(), 1);
    }

    #[test]
    fn timer_runs_after_launch_and_freezes_on_stop() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.launch(t0);
        st.poll(t0);
        assert_eq!(st.timer().label(), "00:00:00");
        st.poll(t0 + Duration::from_secs(1));
        assert_eq!(st.timer().label(), "00:00:01");
        st.poll(t0 + Duration::from_secs(2));
        assert_eq!(st.timer().label(), "00:00:02");

        st.stop_receiving(t0 + Duration::from_millis(2500));
        st.poll(t0 + Duration::from_secs(3));
        st.poll(t0 + Duration::from_secs(10));
        assert_eq!(st.timer().label(), "00:00:02");
        assert_eq!(st.next_deadline(), None);
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut cfg = StationConfig::default();
        cfg.ranges.temperature = SampleRange::new(20.0, -20.0);
        assert!(matches!(
            GroundStation::new(cfg),
            Err(ConfigError::InvalidRange { name: "temperature", .. })
        ));

        let cfg = StationConfig {
            gps_step_deg: f64::NAN,
            ..Default::default()
        };
        assert!(GroundStation::new(cfg).is_err());
    }

    #[test]
    fn clear_log_keeps_history() {
        let t0 = Instant::now();
        let mut st = seeded();
        st.start_receiving(t0);
        st.poll(t0);
        st.poll(t0 + TICK);
        st.clear_log();
        assert_eq!(st.history().len(), 2);
        assert!(st.is_receiving());
    }

    #[test]
    fn seeded_stations_are_reproducible() {
        let t0 = Instant::now();
        let mut a = seeded();
        let mut b = seeded();
        a.start_receiving(t0);
        b.start_receiving(t0);
        for i in 0..20 {
            let now = t0 + TICK * i;
            a.poll(now);
            b.poll(now);
        }
        assert_eq!(
            a.history().series(Quantity::Humidity),
            b.history().series(Quantity::Humidity)
        );
        assert_eq!(a.gps(), b.gps());
    }
}
