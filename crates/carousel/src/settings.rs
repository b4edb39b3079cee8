use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("carousel interval must be greater than zero")]
    ZeroInterval,

    #[error("carousel step ratio must be in (0, 1], got {0}")]
    StepRatio(f64),

    #[error("carousel end tolerance must not be negative, got {0}")]
    EndTolerance(f64),
}

/// Timing and geometry shared by the Rust model and the browser glue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub interval_ms: u64,
    /// Fraction of the viewport width advanced per tick.
    pub step_ratio: f64,
    /// Distance from the end, in pixels, that already counts as the end.
    pub end_tolerance: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            step_ratio: 0.5,
            end_tolerance: 10.0,
        }
    }
}

impl CarouselSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.interval_ms == 0 {
            return Err(SettingsError::ZeroInterval);
        }

        if !(self.step_ratio > 0.0 && self.step_ratio <= 1.0) {
            return Err(SettingsError::StepRatio(self.step_ratio));
        }

        if self.end_tolerance.is_nan() || self.end_tolerance < 0.0 {
            return Err(SettingsError::EndTolerance(self.end_tolerance));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_landing_page() {
        let settings = CarouselSettings::default();

        assert_eq!(settings.interval(), Duration::from_secs(4));
        assert_eq!(settings.step_ratio, 0.5);
        assert_eq!(settings.end_tolerance, 10.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let zero = CarouselSettings {
            interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(SettingsError::ZeroInterval));

        for step_ratio in [0.0, -0.5, 1.5, f64::NAN] {
            let settings = CarouselSettings {
                step_ratio,
                ..Default::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(SettingsError::StepRatio(_))
            ));
        }

        let negative = CarouselSettings {
            end_tolerance: -1.0,
            ..Default::default()
        };
        assert_eq!(negative.validate(), Err(SettingsError::EndTolerance(-1.0)));
    }
}
