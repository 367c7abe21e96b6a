//! Environmental conditions sent alongside a shot.

use serde::{Deserialize, Serialize};

use crate::error::{CaddieError, Result};

/// Sea-level standard pressure (inHg). Custom submissions always use this.
pub const STANDARD_PRESSURE_INHG: f64 = 29.92;

/// Weather and course conditions for one shot.
///
/// Field names match the trajectory service's `conditions` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Wind speed (mph)
    pub wind_speed_mph: f64,
    /// Wind direction (deg, 0 = headwind, 90 = left-to-right)
    pub wind_direction_deg: f64,
    /// Air temperature (°F)
    pub temperature_f: f64,
    /// Altitude above sea level (ft)
    pub altitude_ft: f64,
    /// Relative humidity (%)
    pub humidity_pct: f64,
    /// Barometric pressure (inHg)
    pub pressure_inhg: f64,
}

impl Conditions {
    /// Still air, 70°F, sea level, 50% humidity, standard pressure.
    pub const fn calm() -> Self {
        Self {
            wind_speed_mph: 0.0,
            wind_direction_deg: 0.0,
            temperature_f: 70.0,
            altitude_ft: 0.0,
            humidity_pct: 50.0,
            pressure_inhg: STANDARD_PRESSURE_INHG,
        }
    }

    /// Reject NaN or infinite fields before they reach the service.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("wind_speed_mph", self.wind_speed_mph),
            ("wind_direction_deg", self.wind_direction_deg),
            ("temperature_f", self.temperature_f),
            ("altitude_ft", self.altitude_ft),
            ("humidity_pct", self.humidity_pct),
            ("pressure_inhg", self.pressure_inhg),
        ];
        match fields.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(CaddieError::InvalidCondition { field, value }),
            None => Ok(()),
        }
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::calm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calm_is_valid() {
        let c = Conditions::calm();
        assert!(c.validate().is_ok());
        assert_eq!(c.wind_speed_mph, 0.0);
        assert_eq!(c.pressure_inhg, 29.92);
        assert_eq!(Conditions::default(), c);
    }

    #[test]
    fn non_finite_field_is_rejected() {
        let c = Conditions { altitude_ft: f64::INFINITY, ..Conditions::calm() };
        match c.validate() {
            Err(CaddieError::InvalidCondition { field, .. }) => assert_eq!(field, "altitude_ft"),
            other => panic!("expected InvalidCondition, got {other:?}"),
        }

        let c = Conditions { humidity_pct: f64::NAN, ..Conditions::calm() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn serializes_with_wire_names() {
        let v = serde_json::to_value(Conditions::calm()).unwrap();
        assert_eq!(v["temperature_f"], 70.0);
        assert_eq!(v["pressure_inhg"], 29.92);
        assert_eq!(v.as_object().unwrap().len(), 6);
    }
}
