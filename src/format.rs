//! Display formatting: deltas, impact bars, wind direction, and stat text.
//!
//! Everything here is a pure function of numbers into small view structs;
//! nothing renders.

use std::fmt;

use serde::Serialize;

use crate::conditions::Conditions;
use crate::trajectory::FlightStats;

/// Deltas within ±0.5 are rounding noise and stay neutral.
pub const DELTA_DEAD_BAND: f64 = 0.5;

/// Impact of this many yards (or more) fills the whole bar.
pub const IMPACT_BAR_MAX_YARDS: f64 = 20.0;

/// Altitudes at or below this (ft) read as "Sea level" on the conditions pill.
pub const SEA_LEVEL_FT: f64 = 100.0;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Left or right of the target line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

// ---------------------------------------------------------------------------
// Deltas
// ---------------------------------------------------------------------------

/// Visual state of a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaState {
    Negative,
    Neutral,
    Positive,
}

impl DeltaState {
    pub fn of(value: f64) -> Self {
        if value < -DELTA_DEAD_BAND {
            Self::Negative
        } else if value > DELTA_DEAD_BAND {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}

/// A signed change, e.g. `"+12.3"` or `"-4.0°"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delta {
    pub text: String,
    pub state: DeltaState,
}

impl Delta {
    /// One decimal, `+` for zero and up, `unit` appended verbatim.
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            text: signed_one_decimal(value, unit),
            state: DeltaState::of(value),
        }
    }
}

fn signed_one_decimal(value: f64, unit: &str) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}{unit}")
}

// ---------------------------------------------------------------------------
// Impact bars
// ---------------------------------------------------------------------------

/// Whether a factor helps or hurts distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// One row of the impact breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactBar {
    /// 0 to 100
    pub width_pct: f64,
    pub polarity: Polarity,
    /// e.g. `"-12.4 yds"`
    pub label: String,
}

impl ImpactBar {
    /// Scale `yards` against a fixed 20-yard ceiling. Larger values clamp.
    pub fn new(yards: f64) -> Self {
        Self {
            width_pct: (yards.abs() / IMPACT_BAR_MAX_YARDS * 100.0).min(100.0),
            polarity: if yards < 0.0 { Polarity::Negative } else { Polarity::Positive },
            label: signed_one_decimal(yards, " yds"),
        }
    }
}

// ---------------------------------------------------------------------------
// Wind direction
// ---------------------------------------------------------------------------

/// Compass sector of the wind relative to the shot line.
///
/// Eight 45° sectors centred on 0° (headwind), 45°, 90° (left-to-right), ...
/// Each sector includes its lower edge and excludes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindSector {
    Headwind,
    QuarteringHeadLeft,
    LeftToRightCrosswind,
    QuarteringTailLeft,
    Tailwind,
    QuarteringTailRight,
    RightToLeftCrosswind,
    QuarteringHeadRight,
}

impl WindSector {
    /// All sectors in compass order from 0°.
    pub const ALL: [Self; 8] = [
        Self::Headwind,
        Self::QuarteringHeadLeft,
        Self::LeftToRightCrosswind,
        Self::QuarteringTailLeft,
        Self::Tailwind,
        Self::QuarteringTailRight,
        Self::RightToLeftCrosswind,
        Self::QuarteringHeadRight,
    ];

    /// Upper edge (exclusive) of each sector in [`ALL`](Self::ALL), except
    /// headwind, whose range wraps through 0°.
    const UPPER_EDGES: [f64; 8] = [22.5, 67.5, 112.5, 157.5, 202.5, 247.5, 292.5, 337.5];

    /// Classify a wind direction. Angles outside [0, 360) wrap.
    pub fn from_degrees(deg: f64) -> Self {
        let d = deg.rem_euclid(360.0);
        // Past the last edge (or exactly 360.0 after wrapping) is headwind again.
        let idx = Self::UPPER_EDGES.iter().position(|&edge| d < edge).unwrap_or(0);
        Self::ALL[idx]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Headwind => "headwind",
            Self::QuarteringHeadLeft => "quartering head-left",
            Self::LeftToRightCrosswind => "L-to-R crosswind",
            Self::QuarteringTailLeft => "quartering tail-left",
            Self::Tailwind => "tailwind",
            Self::QuarteringTailRight => "quartering tail-right",
            Self::RightToLeftCrosswind => "R-to-L crosswind",
            Self::QuarteringHeadRight => "quartering head-right",
        }
    }
}

impl fmt::Display for WindSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// Round to whole yards (half away from zero).
pub fn whole(value: f64) -> i64 {
    value.round() as i64
}

/// Format with comma thousands separators and at most three decimals:
/// `5280.0` → `"5,280"`, `1234.56789` → `"1,234.568"`.
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let text = rounded.trim_end_matches('0').trim_end_matches('.');
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text, None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if value < 0.0 && text != "0" {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

// ---------------------------------------------------------------------------
// Conditions and stat text
// ---------------------------------------------------------------------------

/// Short condition summaries shown above the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionPills {
    /// `"45°F"`
    pub temperature: String,
    /// `"20 mph headwind"`
    pub wind: String,
    /// `"5,280 ft"` or `"Sea level"`
    pub altitude: String,
    /// `"70% humidity"`
    pub humidity: String,
}

impl ConditionPills {
    pub fn new(c: &Conditions) -> Self {
        let altitude = if c.altitude_ft > SEA_LEVEL_FT {
            format!("{} ft", group_thousands(c.altitude_ft))
        } else {
            "Sea level".to_string()
        };
        Self {
            temperature: format!("{}°F", c.temperature_f),
            wind: format!(
                "{} mph {}",
                c.wind_speed_mph,
                WindSector::from_degrees(c.wind_direction_deg)
            ),
            altitude,
            humidity: format!("{}% humidity", c.humidity_pct),
        }
    }
}

/// One flight's numbers as displayed: whole yards, one-decimal seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatPanel {
    pub carry: i64,
    pub total: i64,
    pub apex: i64,
    /// Magnitude only; direction is carried by the drift delta.
    pub drift: i64,
    /// `"6.1"`
    pub flight_time: String,
    /// `"47°"`
    pub landing_angle: String,
}

impl StatPanel {
    pub fn new(f: &FlightStats) -> Self {
        Self {
            carry: whole(f.carry_yards),
            total: whole(f.total_yards),
            apex: whole(f.apex_height_yards),
            drift: whole(f.lateral_drift_yards.abs()),
            flight_time: format!("{:.1}", f.flight_time_seconds),
            landing_angle: format!("{}°", whole(f.landing_angle_deg)),
        }
    }
}

/// Slider readouts for the custom-conditions form.
pub mod input {
    use super::group_thousands;

    pub fn temperature(temperature_f: f64) -> String {
        format!("{temperature_f}°F")
    }

    pub fn wind_speed(wind_speed_mph: f64) -> String {
        format!("{wind_speed_mph} mph")
    }

    pub fn altitude(altitude_ft: f64) -> String {
        if altitude_ft == 0.0 {
            "Sea level".to_string()
        } else {
            format!("{} ft", group_thousands(altitude_ft))
        }
    }

    pub fn humidity(humidity_pct: f64) -> String {
        format!("{humidity_pct}%")
    }
}
