//! Plain-language explanation of an impact breakdown (custom shots).
//!
//! The explanation is an ordered list of independently gated fragments,
//! joined with `". "` and closed with a period. The net-effect fragment is
//! always last and always present.

use std::fmt;

use serde::Serialize;

use crate::conditions::Conditions;
use crate::format::{Side, group_thousands, whole};
use crate::trajectory::TrajectoryResult;

/// Wind effects up to this many yards (either way) go unmentioned.
pub const WIND_YARDS: f64 = 3.0;
/// Temperature effects up to this many yards go unmentioned.
pub const TEMPERATURE_YARDS: f64 = 2.0;
/// Below this (°F) the air is described as cold.
pub const COLD_BELOW_F: f64 = 60.0;
/// Above this (°F) the air is described as hot.
pub const HOT_ABOVE_F: f64 = 85.0;
/// Altitude gains up to this many yards go unmentioned.
pub const ALTITUDE_YARDS: f64 = 3.0;
/// Drift up to this many yards goes unmentioned.
pub const DRIFT_YARDS: f64 = 5.0;
/// Net changes up to this many yards read as "minimal change".
pub const NET_YARDS: f64 = 2.0;

/// One sentence of the explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    Wind { yards: i64, helping: bool },
    Cold { temperature_f: f64, yards: i64 },
    /// `yards` keeps the service's sign.
    Hot { temperature_f: f64, yards: i64 },
    Altitude { altitude_ft: f64, yards: i64 },
    /// Positive drift reads "right", negative "left".
    Drift { yards: i64, side: Side },
    Net { yards: i64, further: bool },
    NetMinimal,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wind { yards, helping } => {
                let verb = if *helping { "adding" } else { "costing" };
                write!(f, "The wind is {verb} you {yards} yards")
            }
            Self::Cold { temperature_f, yards } => write!(
                f,
                "Cold {temperature_f}°F air is dense, reducing distance by {yards} yards"
            ),
            Self::Hot { temperature_f, yards } => {
                write!(f, "Hot {temperature_f}°F air is thin, adding {yards} yards")
            }
            Self::Altitude { altitude_ft, yards } => write!(
                f,
                "The {} ft altitude adds {yards} yards due to thinner air",
                group_thousands(*altitude_ft)
            ),
            Self::Drift { yards, side } => write!(f, "Expect {yards} yards of {side} drift"),
            Self::Net { yards, further } => {
                let word = if *further { "further" } else { "shorter" };
                write!(f, "Net effect: {yards} yards {word} than calm conditions")
            }
            Self::NetMinimal => write!(f, "Net effect: minimal change from calm conditions"),
        }
    }
}

/// A generated explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub fragments: Vec<Fragment>,
}

impl Explanation {
    /// Narrate the factors in `result` that are large enough to matter.
    pub fn generate(result: &TrajectoryResult, conditions: &Conditions) -> Self {
        let impact = &result.impact_breakdown;
        let mut fragments = Vec::with_capacity(5);

        let wind = impact.wind_effect_yards;
        if wind.abs() > WIND_YARDS {
            fragments.push(Fragment::Wind { yards: whole(wind.abs()), helping: wind >= 0.0 });
        }

        // 60-85°F is never narrated, whatever the effect.
        let temp = impact.temperature_effect_yards;
        if temp.abs() > TEMPERATURE_YARDS {
            let temperature_f = conditions.temperature_f;
            if temperature_f < COLD_BELOW_F {
                fragments.push(Fragment::Cold { temperature_f, yards: whole(temp.abs()) });
            } else if temperature_f > HOT_ABOVE_F {
                fragments.push(Fragment::Hot { temperature_f, yards: whole(temp) });
            }
        }

        // One-sided: altitude only ever adds distance.
        let altitude = impact.altitude_effect_yards;
        if altitude > ALTITUDE_YARDS {
            fragments.push(Fragment::Altitude {
                altitude_ft: conditions.altitude_ft,
                yards: whole(altitude),
            });
        }

        let drift = result.adjusted.lateral_drift_yards;
        if drift.abs() > DRIFT_YARDS {
            let side = if drift > 0.0 { Side::Right } else { Side::Left };
            fragments.push(Fragment::Drift { yards: whole(drift.abs()), side });
        }

        let total = impact.total_adjustment_yards;
        if total.abs() > NET_YARDS {
            fragments.push(Fragment::Net { yards: whole(total.abs()), further: total > 0.0 });
        } else {
            fragments.push(Fragment::NetMinimal);
        }

        Self { fragments }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                write!(f, ". ")?;
            }
            write!(f, "{fragment}")?;
        }
        write!(f, ".")
    }
}
