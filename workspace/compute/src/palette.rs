//! Colours and style classes per AQI category.
//!
//! The string-keyed helpers all go through [`AqiCategory::from_label`], so
//! the four mappings can never disagree on which bucket a label falls in.

use crate::aqi::AqiCategory;
use crate::error::{ComputeError, Result};

/// Alpha of the forecast row background tint.
pub const TINT_ALPHA: f64 = 0.2;

impl AqiCategory {
    /// Suffix of the `aqi-*` stylesheet class.
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::UnhealthyForSensitiveGroups => "unhealthy-sensitive",
            Self::Unhealthy => "unhealthy",
            Self::VeryUnhealthy => "very-unhealthy",
            Self::Hazardous => "hazardous",
        }
    }

    /// Bootstrap contextual colour (`bg-*`, `text-*`).
    pub fn bootstrap_color(self) -> &'static str {
        match self {
            Self::Good => "success",
            Self::Moderate | Self::UnhealthyForSensitiveGroups => "warning",
            Self::Unhealthy => "danger",
            Self::VeryUnhealthy | Self::Hazardous => "dark",
        }
    }

    /// EPA canonical colour.
    pub fn hex_color(self) -> &'static str {
        match self {
            Self::Good => "#00e400",
            Self::Moderate => "#ffff00",
            Self::UnhealthyForSensitiveGroups => "#ff7e00",
            Self::Unhealthy => "#ff0000",
            Self::VeryUnhealthy => "#8f3f97",
            Self::Hazardous => "#7e0023",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Good => (0, 228, 0),
            Self::Moderate => (255, 255, 0),
            Self::UnhealthyForSensitiveGroups => (255, 126, 0),
            Self::Unhealthy => (255, 0, 0),
            Self::VeryUnhealthy => (143, 63, 151),
            Self::Hazardous => (126, 0, 35),
        }
    }

    /// Translucent version of [`hex_color`](Self::hex_color) for row backgrounds.
    pub fn background_tint(self) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({}, {}, {}, {})", r, g, b, TINT_ALPHA)
    }
}

pub fn style_class(label: &str) -> &'static str {
    AqiCategory::from_label(label).style_class()
}

pub fn bootstrap_color(label: &str) -> &'static str {
    AqiCategory::from_label(label).bootstrap_color()
}

pub fn hex_color(label: &str) -> &'static str {
    AqiCategory::from_label(label).hex_color()
}

pub fn background_tint(label: &str) -> String {
    AqiCategory::from_label(label).background_tint()
}

/// Scales each channel of a `#rrggbb` colour by `(100 - percent) / 100`,
/// flooring in integer arithmetic. `percent` is clamped to `0..=100`.
pub fn darken(hex: &str, percent: u8) -> Result<String> {
    let (r, g, b) = parse_hex(hex)?;
    let keep = 100 - u32::from(percent.min(100));
    let scale = |channel: u8| (u32::from(channel) * keep / 100) as u8;
    Ok(format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b)))
}

fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let invalid = || ComputeError::InvalidHexColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
