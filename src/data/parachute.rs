use std::fmt;

/// Deployment state shown on the console, derived from the latest altitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParachuteStatus {
    #[default]
    NotEjected,
    Ejected,
}

impl ParachuteStatus {
    /// `Ejected` iff `altitude` is strictly above `threshold`. No hysteresis.
    pub fn from_altitude(altitude: f64, threshold: f64) -> Self {
        if altitude > threshold {
            ParachuteStatus::Ejected
        } else {
            ParachuteStatus::NotEjected
        }
    }

    pub fn label(self) -> String {
        format!("Parachute Status: {self}")
    }
}

impl fmt::Display for ParachuteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParachuteStatus::NotEjected => f.write_str("Not Ejected"),
            ParachuteStatus::Ejected => f.write_str("Ejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(
            ParachuteStatus::from_altitude(10.0, 10.0),
            ParachuteStatus::NotEjected
        );
        assert_eq!(
            ParachuteStatus::from_altitude(10.000_001, 10.0),
            ParachuteStatus::Ejected
        );
    }

    #[test]
    fn label_text() {
        assert_eq!(ParachuteStatus::Ejected.label(), "Parachute Status: Ejected");
        assert_eq!(
            ParachuteStatus::default().label(),
            "Parachute Status: Not Ejected"
        );
    }
}
