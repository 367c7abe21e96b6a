//! Shot parameters derived from a club and a target carry.

use serde::{Deserialize, Serialize};

use crate::club::Club;
use crate::error::{CaddieError, Result};

/// Launch parameters for one shot. Field names match the service's `shot` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotParameters {
    /// Ball speed (mph, whole number)
    pub ball_speed_mph: f64,
    /// Launch angle (deg)
    pub launch_angle_deg: f64,
    /// Spin rate (rpm)
    pub spin_rate_rpm: f64,
    /// Spin axis tilt (deg, always 0: straight shot)
    pub spin_axis_deg: f64,
    /// Start direction (deg, always 0: on line)
    pub direction_deg: f64,
}

impl ShotParameters {
    /// Scale a club's standard profile so it carries `target_carry_yards` in calm air.
    ///
    /// Carry grows roughly with the square of ball speed, so speed scales with
    /// `sqrt(target / standard)`. Launch and spin are the club's own values.
    pub fn derive(club_key: &str, target_carry_yards: f64) -> Result<Self> {
        let club = Club::from_key(club_key)?;
        Self::for_club(club, target_carry_yards)
    }

    /// As [`derive`](Self::derive), for an already resolved club.
    pub fn for_club(club: &Club, target_carry_yards: f64) -> Result<Self> {
        if !target_carry_yards.is_finite() || target_carry_yards <= 0.0 {
            return Err(CaddieError::InvalidCarry { carry: target_carry_yards });
        }
        let carry_ratio = target_carry_yards / club.carry_yards;
        Ok(Self {
            ball_speed_mph: (club.ball_speed_mph * carry_ratio.sqrt()).round(),
            launch_angle_deg: club.launch_angle_deg,
            spin_rate_rpm: club.spin_rate_rpm,
            spin_axis_deg: 0.0,
            direction_deg: 0.0,
        })
    }
}
