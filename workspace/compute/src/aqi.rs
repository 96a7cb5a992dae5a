//! The six EPA AQI categories and the two ways a value reaches one:
//! from a number via fixed breakpoints, or from a free-form label sent by
//! the prediction service.

use std::fmt;
use tracing::debug;

/// Upper bound (inclusive) of each category except the last.
pub const BREAKPOINTS: [f64; 5] = [50.0, 100.0, 150.0, 200.0, 300.0];

/// The six standard AQI categories, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    /// 0–50
    Good,
    /// 51–100
    Moderate,
    /// 101–150
    UnhealthyForSensitiveGroups,
    /// 151–200
    Unhealthy,
    /// 201–300
    VeryUnhealthy,
    /// 301+
    Hazardous,
}

impl AqiCategory {
    /// All categories in severity order, for iteration.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// 0 for Good up to 5 for Hazardous.
    pub fn severity(self) -> u8 {
        self as u8
    }

    /// Inclusive AQI range as shown in the scale legend.
    pub fn range_label(self) -> &'static str {
        match self {
            Self::Good => "0-50",
            Self::Moderate => "51-100",
            Self::UnhealthyForSensitiveGroups => "101-150",
            Self::Unhealthy => "151-200",
            Self::VeryUnhealthy => "201-300",
            Self::Hazardous => "301+",
        }
    }

    /// Classifies a category label by case-insensitive substring match.
    ///
    /// Priority: "good", "moderate", "sensitive", "unhealthy" without
    /// "very", then "very". Anything else lands in `Hazardous`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("good") {
            Self::Good
        } else if label.contains("moderate") {
            Self::Moderate
        } else if label.contains("sensitive") {
            Self::UnhealthyForSensitiveGroups
        } else if label.contains("unhealthy") && !label.contains("very") {
            Self::Unhealthy
        } else if label.contains("very") {
            Self::VeryUnhealthy
        } else {
            if !label.contains("hazardous") {
                debug!(%label, "unrecognised category label, using Hazardous");
            }
            Self::Hazardous
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category of a numeric AQI value. NaN falls through to `Hazardous`.
pub fn categorize(aqi: f64) -> AqiCategory {
    match BREAKPOINTS.iter().position(|bound| aqi <= *bound) {
        Some(index) => AqiCategory::ALL[index],
        None => AqiCategory::Hazardous,
    }
}

/// Rounds to the nearest integer for display, halves towards positive
/// infinity.
pub fn round_aqi(aqi: f64) -> i64 {
    (aqi + 0.5).floor() as i64
}
