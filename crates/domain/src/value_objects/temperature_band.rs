//! Temperature band classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of the current temperature, used to pick the
/// page background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Below 55
    Cold,
    /// 55 to 75 inclusive
    Mild,
    /// Above 75
    Hot,
}

impl TemperatureBand {
    /// Lower bound of the mild band (inclusive)
    pub const MILD_MIN: i32 = 55;
    /// Upper bound of the mild band (inclusive)
    pub const MILD_MAX: i32 = 75;

    /// Classify a temperature reading
    ///
    /// The thresholds are applied to the number as reported, regardless of unit.
    #[must_use]
    pub const fn from_temperature(temperature: i32) -> Self {
        if temperature < Self::MILD_MIN {
            Self::Cold
        } else if temperature <= Self::MILD_MAX {
            Self::Mild
        } else {
            Self::Hot
        }
    }

    /// Background colour associated with the band
    #[must_use]
    pub const fn background_color(self) -> &'static str {
        match self {
            Self::Cold => "#e6f3ff",
            Self::Mild => "#e6ffe6",
            Self::Hot => "#fff0e6",
        }
    }

    /// Band name as used in markup
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Mild => "mild",
            Self::Hot => "hot",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(TemperatureBand::from_temperature(54), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_temperature(55), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_temperature(75), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_temperature(76), TemperatureBand::Hot);
    }

    #[test]
    fn negative_is_cold() {
        assert_eq!(TemperatureBand::from_temperature(-20), TemperatureBand::Cold);
    }

    #[test]
    fn background_colors() {
        assert_eq!(TemperatureBand::Cold.background_color(), "#e6f3ff");
        assert_eq!(TemperatureBand::Mild.background_color(), "#e6ffe6");
        assert_eq!(TemperatureBand::Hot.background_color(), "#fff0e6");
    }

    #[test]
    fn display_and_serde_agree() {
        for band in [
            TemperatureBand::Cold,
            TemperatureBand::Mild,
            TemperatureBand::Hot,
        ] {
            let json = serde_json::to_string(&band).expect("serialize");
            assert_eq!(json, format!("\"{band}\""));
        }
    }
}
