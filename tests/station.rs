use std::time::{Duration, Instant};

use groundstation::data::history::Quantity;
use groundstation::data::parachute::ParachuteStatus;
use groundstation::{GroundStation, StationConfig, TelemetrySample, TelemetrySource};

const TICK: Duration = Duration::from_millis(100);

fn seeded(seed: u64) -> GroundStation {
    GroundStation::new(StationConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
}

/// Runs `n` ticks starting at `t0`, returning the instant after the last one.
fn run_ticks(st: &mut GroundStation, t0: Instant, n: u32) -> Instant {
    let mut now = t0;
    for _ in 0..n {
        st.poll(now);
        now += TICK;
    }
    now
}

/// Replays a fixed list of altitudes; other channels are constant.
struct Scripted {
    altitudes: Vec<f64>,
    next: usize,
}

impl TelemetrySource for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn next_sample(&mut self) -> TelemetrySample {
        let altitude = self.altitudes[self.next % self.altitudes.len()];
        self.next += 1;
        TelemetrySample {
            altitude,
            acceleration: 0.0,
            temperature: 15.0,
            pressure: 101_325.0,
            humidity: 50.0,
        }
    }
}

#[test]
fn rotation_stays_below_360() {
    let t0 = Instant::now();
    let mut st = seeded(11);
    st.start_receiving(t0);
    let mut now = t0;
    for _ in 0..1000 {
        st.poll(now);
        let deg = st.orientation().degrees();
        assert!((0.0..360.0).contains(&deg), "angle {deg} out of range");
        now += TICK;
    }
    // 1000 ticks of 2° = 2000° = 5 full turns + 200°.
    assert_eq!(st.orientation().degrees(), 200.0);
}

#[test]
fn history_length_matches_ticks_since_launch() {
    let t0 = Instant::now();
    let mut st = seeded(5);
    st.start_receiving(t0);
    let now = run_ticks(&mut st, t0, 30);
    assert_eq!(st.history().len(), 30);

    st.launch(now);
    let _ = run_ticks(&mut st, now, 12);
    for q in [
        Quantity::Altitude,
        Quantity::Acceleration,
        Quantity::Temperature,
        Quantity::Pressure,
        Quantity::Humidity,
    ] {
        assert_eq!(st.history().series(q).len(), 12);
    }
}

#[test]
fn gps_drift_is_bounded_by_tick_count() {
    let t0 = Instant::now();
    let cfg = StationConfig {
        seed: Some(99),
        ..Default::default()
    };
    let (lat0, lon0) = cfg.gps_origin;
    let mut st = GroundStation::new(cfg).unwrap();
    st.start_receiving(t0);
    let n = 2_000;
    run_ticks(&mut st, t0, n);
    let gps = st.gps();
    let bound = 0.0001 * f64::from(n) + 1e-9;
    assert!(gps.latitude.is_finite() && gps.longitude.is_finite());
    assert!((gps.latitude - lat0).abs() <= bound);
    assert!((gps.longitude - lon0).abs() <= bound);
}

#[test]
fn parachute_flips_with_altitude_without_hysteresis() {
    let t0 = Instant::now();
    let source = Scripted {
        altitudes: vec![5.0, 10.0, 10.5, 3.0, 19.9],
        next: 0,
    };
    let mut st = GroundStation::with_source(StationConfig::default(), Box::new(source)).unwrap();
    st.start_receiving(t0);

    let expected = [
        ParachuteStatus::NotEjected,
        ParachuteStatus::NotEjected,
        ParachuteStatus::Ejected,
        ParachuteStatus::NotEjected,
        ParachuteStatus::Ejected,
    ];
    let mut now = t0;
    for status in expected {
        st.poll(now);
        assert_eq!(st.parachute(), status);
        now += TICK;
    }
    assert_eq!(st.parachute().label(), "Parachute Status: Ejected");
}

#[test]
fn at_most_one_tick_after_stop() {
    let t0 = Instant::now();
    let mut st = seeded(3);
    st.start_receiving(t0);
    let now = run_ticks(&mut st, t0, 5);
    st.stop_receiving(now);
    let fired = st.tick_invocations();
    let recorded = st.history().len();

    run_ticks(&mut st, now, 20);
    assert!(st.tick_invocations() <= fired + 1);
    assert_eq!(st.history().len(), recorded);

    // Restarting resumes the loop.
    let later = now + TICK * 30;
    st.start_receiving(later);
    st.poll(later);
    assert_eq!(st.history().len(), recorded + 1);
}

#[test]
fn timer_label_is_monotone_and_well_formed() {
    let t0 = Instant::now();
    let mut st = seeded(8);
    st.launch(t0);
    let mut prev = String::new();
    for s in 0..125 {
        st.poll(t0 + Duration::from_secs(s));
        let label = st.timer().label().to_string();
        assert_eq!(label.len(), 8);
        let parts: Vec<&str> = label.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
        assert!(label >= prev, "{label} < {prev}");
        prev = label;
    }
    assert_eq!(prev, "00:02:04");

    st.stop_receiving(t0 + Duration::from_secs(125));
    st.poll(t0 + Duration::from_secs(500));
    assert_eq!(st.timer().label(), "00:02:04");
}

#[test]
fn clear_log_leaves_history_untouched() {
    let t0 = Instant::now();
    let mut st = seeded(21);
    st.start_receiving(t0);
    let now = run_ticks(&mut st, t0, 7);
    let altitudes = st.history().series(Quantity::Altitude).to_vec();

    st.clear_log();
    assert_eq!(st.history().len(), 7);
    assert_eq!(st.history().series(Quantity::Altitude), &altitudes[..]);

    // Receiving continues after the no-op.
    st.poll(now);
    assert_eq!(st.history().len(), 8);
}

#[test]
fn config_that_would_overflow_sampling_is_refused() {
    let mut cfg = StationConfig::default();
    cfg.ranges.pressure.min = -f64::MAX;
    cfg.ranges.pressure.max = f64::MAX;
    assert!(GroundStation::new(cfg).is_err());
}
