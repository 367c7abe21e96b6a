//! Wire types for `POST /v1/trajectory`.
//!
//! - [`TrajectoryRequest`]: what we send: a shot plus its conditions
//! - [`TrajectoryResult`]: what the service returns: baseline and adjusted
//!   flights plus a per-factor impact breakdown
//!
//! Fields the service may add later are ignored on decode. Optional extras
//! (`wind_lateral_yards`, `equivalent_calm_distance_yards`,
//! `trajectory_points`) default when absent.

use serde::{Deserialize, Serialize};

use crate::conditions::Conditions;
use crate::shot::ShotParameters;

/// Path of the trajectory endpoint, relative to the API base.
pub const TRAJECTORY_PATH: &str = "/v1/trajectory";

/// Request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryRequest {
    pub shot: ShotParameters,
    pub conditions: Conditions,
}

/// One simulated ball flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightStats {
    /// Carry distance (yards)
    pub carry_yards: f64,
    /// Carry plus roll (yards)
    pub total_yards: f64,
    /// Peak height (yards)
    pub apex_height_yards: f64,
    /// Sideways displacement at landing (yards, sign per the service)
    pub lateral_drift_yards: f64,
    /// Time in the air (s)
    pub flight_time_seconds: f64,
    /// Descent angle at landing (deg)
    pub landing_angle_deg: f64,
}

/// Per-factor attribution of the carry change between baseline and adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    pub wind_effect_yards: f64,
    /// Sideways wind push (yards). Not sent by older service versions.
    #[serde(default)]
    pub wind_lateral_yards: Option<f64>,
    pub temperature_effect_yards: f64,
    pub altitude_effect_yards: f64,
    pub humidity_effect_yards: f64,
    pub total_adjustment_yards: f64,
}

/// A sampled point on the adjusted flight path (yards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Downrange
    pub x: f64,
    /// Height
    pub y: f64,
    /// Lateral (positive = right)
    pub z: f64,
}

/// Full service response. Read-only once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryResult {
    pub baseline: FlightStats,
    pub adjusted: FlightStats,
    pub impact_breakdown: ImpactBreakdown,
    /// Calm-air distance the adjusted shot "plays like" (yards).
    #[serde(default)]
    pub equivalent_calm_distance_yards: Option<f64>,
    #[serde(default)]
    pub trajectory_points: Vec<TrajectoryPoint>,
}

impl TrajectoryResult {
    /// Adjusted minus baseline carry (yards).
    pub fn carry_diff(&self) -> f64 {
        self.adjusted.carry_yards - self.baseline.carry_yards
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn flight(carry: f64, drift: f64) -> FlightStats {
        FlightStats {
            carry_yards: carry,
            total_yards: carry + 8.0,
            apex_height_yards: 28.0,
            lateral_drift_yards: drift,
            flight_time_seconds: 5.6,
            landing_angle_deg: 45.0,
        }
    }

    pub fn impact(wind: f64, temp: f64, alt: f64, humidity: f64) -> ImpactBreakdown {
        ImpactBreakdown {
            wind_effect_yards: wind,
            wind_lateral_yards: None,
            temperature_effect_yards: temp,
            altitude_effect_yards: alt,
            humidity_effect_yards: humidity,
            total_adjustment_yards: wind + temp + alt + humidity,
        }
    }

    /// Baseline at `carry`, adjusted by `diff` with `drift`.
    pub fn result(carry: f64, diff: f64, drift: f64) -> TrajectoryResult {
        TrajectoryResult {
            baseline: flight(carry, 0.0),
            adjusted: flight(carry + diff, drift),
            impact_breakdown: impact(diff, 0.0, 0.0, 0.0),
            equivalent_calm_distance_yards: None,
            trajectory_points: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "adjusted": {"carry_yards": 141.2, "total_yards": 147.9, "lateral_drift_yards": -0.4,
                     "apex_height_yards": 31.0, "flight_time_seconds": 6.1, "landing_angle_deg": 52.3},
        "baseline": {"carry_yards": 165.3, "total_yards": 174.0, "lateral_drift_yards": 0.0,
                     "apex_height_yards": 27.5, "flight_time_seconds": 5.9, "landing_angle_deg": 47.1},
        "impact_breakdown": {"wind_effect_yards": -23.1, "wind_lateral_yards": 0.0,
                             "temperature_effect_yards": 0.0, "altitude_effect_yards": 0.0,
                             "humidity_effect_yards": -1.0, "total_adjustment_yards": -24.1},
        "equivalent_calm_distance_yards": 189.4,
        "trajectory_points": [{"x": 0.0, "y": 0.0, "z": 0.0}, {"x": 70.2, "y": 29.8, "z": -0.2}],
        "conditions_used": {"wind_speed_mph": 20, "wind_direction_deg": 0}
    }"#;

    #[test]
    fn decode_full_response() {
        let r: TrajectoryResult = serde_json::from_str(RESPONSE).unwrap();
        assert_eq!(r.adjusted.carry_yards, 141.2);
        assert_eq!(r.baseline.landing_angle_deg, 47.1);
        assert_eq!(r.impact_breakdown.wind_effect_yards, -23.1);
        assert_eq!(r.impact_breakdown.wind_lateral_yards, Some(0.0));
        assert_eq!(r.equivalent_calm_distance_yards, Some(189.4));
        assert_eq!(r.trajectory_points.len(), 2);
        assert!((r.carry_diff() - (-24.1)).abs() < 1e-9);
    }

    #[test]
    fn decode_minimal_response() {
        let json = r#"{
            "baseline": {"carry_yards": 230, "total_yards": 250, "lateral_drift_yards": 0,
                         "apex_height_yards": 30, "flight_time_seconds": 6.5, "landing_angle_deg": 38},
            "adjusted": {"carry_yards": 230, "total_yards": 250, "lateral_drift_yards": 0,
                         "apex_height_yards": 30, "flight_time_seconds": 6.5, "landing_angle_deg": 38},
            "impact_breakdown": {"wind_effect_yards": 0, "temperature_effect_yards": 0,
                                 "altitude_effect_yards": 0, "humidity_effect_yards": 0,
                                 "total_adjustment_yards": 0}
        }"#;
        let r: TrajectoryResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.impact_breakdown.wind_lateral_yards, None);
        assert_eq!(r.equivalent_calm_distance_yards, None);
        assert!(r.trajectory_points.is_empty());
        assert_eq!(r.carry_diff(), 0.0);
    }

    #[test]
    fn missing_required_field_fails() {
        let json = r#"{"baseline": {"carry_yards": 1}}"#;
        assert!(serde_json::from_str::<TrajectoryResult>(json).is_err());
    }

    #[test]
    fn request_body_shape() {
        let req = TrajectoryRequest {
            shot: ShotParameters::derive("7-iron", 165.0).unwrap(),
            conditions: Conditions::calm(),
        };
        let v = serde_json::to_value(req).unwrap();
        assert_eq!(v["shot"]["ball_speed_mph"], 104.0);
        assert_eq!(v["shot"]["spin_axis_deg"], 0.0);
        assert_eq!(v["conditions"]["humidity_pct"], 50.0);
        assert_eq!(v.as_object().unwrap().len(), 2);
    }
}
