//! Simulated GPS fix that drifts by a small random walk every tick.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPosition {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Perturb both coordinates independently by a uniform draw in `[-step, step]`.
    ///
    /// No bounds are applied; the fix can drift arbitrarily far over time.
    pub fn random_walk<R: Rng>(&mut self, rng: &mut R, step: f64) {
        if step == 0.0 {
            return;
        }
        self.latitude += rng.gen_range(-step..=step);
        self.longitude += rng.gen_range(-step..=step);
    }

    pub fn label(&self) -> String {
        format!("GPS: ({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for GpsPosition {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn walk_stays_within_step_bound() {
        let origin = GpsPosition::new(28.7041, 77.1025);
        let mut pos = origin;
        let mut rng = StdRng::seed_from_u64(3);
        let n = 500;
        for _ in 0..n {
            pos.random_walk(&mut rng, 0.0001);
        }
        let bound = 0.0001 * n as f64 + 1e-9;
        assert!(pos.latitude.is_finite() && pos.longitude.is_finite());
        assert!((pos.latitude - origin.latitude).abs() <= bound);
        assert!((pos.longitude - origin.longitude).abs() <= bound);
    }

    #[test]
    fn label_uses_six_decimals() {
        assert_eq!(
            GpsPosition::new(28.7041, 77.1025).label(),
            "GPS: (28.704100, 77.102500)"
        );
    }
}
