//! Club recommendation: ladder stepping on carry change plus an aim offset for drift.

use std::fmt;

use serde::Serialize;

use crate::club::{LADDER, ladder_index, ladder_step};
use crate::error::Result;
use crate::format::Side;
use crate::trajectory::TrajectoryResult;

/// Carry changes smaller than this (yards) keep the same club.
pub const SAME_CLUB_YARDS: f64 = 5.0;
/// Carry changes beyond this (yards) move one club.
pub const ONE_CLUB_YARDS: f64 = 8.0;
/// Carry changes beyond this (yards) move two clubs.
pub const TWO_CLUB_YARDS: f64 = 15.0;
/// Drift beyond this (yards) earns an aim offset.
pub const AIM_DRIFT_YARDS: f64 = 5.0;

/// How the carry change moves the club choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    /// Change under 5 yards: labelled "(same club)".
    SameClub,
    /// Move `n` rungs up (positive, longer club) or down (negative).
    Step(i32),
    /// 5 to 8 yards either way: keep the club, no label.
    Hold,
}

impl Adjustment {
    /// Classify `adjusted.carry - baseline.carry`.
    pub fn from_carry_diff(carry_diff: f64) -> Self {
        if carry_diff.abs() < SAME_CLUB_YARDS {
            Self::SameClub
        } else if carry_diff < -TWO_CLUB_YARDS {
            Self::Step(2)
        } else if carry_diff < -ONE_CLUB_YARDS {
            Self::Step(1)
        } else if carry_diff > TWO_CLUB_YARDS {
            Self::Step(-2)
        } else if carry_diff > ONE_CLUB_YARDS {
            Self::Step(-1)
        } else {
            Self::Hold
        }
    }

    /// Requested ladder movement (before clamping).
    pub fn steps(self) -> i32 {
        match self {
            Self::Step(n) => n,
            Self::SameClub | Self::Hold => 0,
        }
    }
}

/// Suggested aim correction for lateral drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AimOffset {
    /// Whole yards
    pub yards: i64,
    pub side: Side,
}

impl AimOffset {
    /// Aim offset for `lateral_drift_yards`, if it exceeds the threshold.
    ///
    /// Positive drift aims left, negative aims right. This follows the
    /// service's drift sign and is the reverse of the wording in
    /// [`explain`](crate::explain); the two are kept independent.
    pub fn for_drift(lateral_drift_yards: f64) -> Option<Self> {
        let magnitude = lateral_drift_yards.abs();
        if magnitude <= AIM_DRIFT_YARDS || magnitude.is_nan() {
            return None;
        }
        let side = if lateral_drift_yards > 0.0 { Side::Left } else { Side::Right };
        Some(Self { yards: magnitude.round() as i64, side })
    }
}

impl fmt::Display for AimOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "aim {}yds {}", self.yards, self.side)
    }
}

/// A club to hit under the adjusted conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Club label as given for the standard shot.
    pub standard_club: String,
    /// Recommended club label (a [`LADDER`] entry, or `standard_club` when unchanged).
    pub club: String,
    pub adjustment: Adjustment,
    pub aim: Option<AimOffset>,
}

impl Recommendation {
    /// Recommend a club from the service result for `standard_club`'s shot.
    pub fn from_result(standard_club: &str, result: &TrajectoryResult) -> Result<Self> {
        Self::new(standard_club, result.carry_diff(), result.adjusted.lateral_drift_yards)
    }

    /// Recommend a club from a carry change and the adjusted lateral drift.
    ///
    /// Fails only when `standard_club` is not on the ladder. Steps past either
    /// end of the ladder stop at LW / Driver.
    pub fn new(standard_club: &str, carry_diff: f64, lateral_drift_yards: f64) -> Result<Self> {
        let index = ladder_index(standard_club)?;
        let adjustment = Adjustment::from_carry_diff(carry_diff);
        let club = match adjustment {
            Adjustment::Step(n) => LADDER[ladder_step(index, n)].to_string(),
            Adjustment::SameClub | Adjustment::Hold => standard_club.to_string(),
        };
        Ok(Self {
            standard_club: standard_club.to_string(),
            club,
            adjustment,
            aim: AimOffset::for_drift(lateral_drift_yards),
        })
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.club)?;
        match self.adjustment {
            Adjustment::SameClub => write!(f, " (same club)")?,
            Adjustment::Step(n) if n.abs() == 1 => write!(f, " ({n:+} club)")?,
            Adjustment::Step(n) => write!(f, " ({n:+} clubs)")?,
            Adjustment::Hold => {}
        }
        if let Some(aim) = &self.aim {
            write!(f, ", {aim}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaddieError;
    use crate::trajectory::fixtures;

    fn label(club: &str, diff: f64, drift: f64) -> String {
        Recommendation::new(club, diff, drift).unwrap().to_string()
    }

    #[test]
    fn threshold_table() {
        assert_eq!(label("7-Iron", 0.0, 0.0), "7-Iron (same club)");
        assert_eq!(label("7-Iron", 4.9, 0.0), "7-Iron (same club)");
        assert_eq!(label("7-Iron", -4.9, 0.0), "7-Iron (same club)");
        assert_eq!(label("7-Iron", 5.0, 0.0), "7-Iron");
        assert_eq!(label("7-Iron", -8.0, 0.0), "7-Iron");
        assert_eq!(label("7-Iron", -8.1, 0.0), "6-Iron (+1 club)");
        assert_eq!(label("7-Iron", -15.0, 0.0), "6-Iron (+1 club)");
        assert_eq!(label("7-Iron", -15.1, 0.0), "5-Iron (+2 clubs)");
        assert_eq!(label("7-Iron", 8.1, 0.0), "8-Iron (-1 club)");
        assert_eq!(label("7-Iron", 15.0, 0.0), "8-Iron (-1 club)");
        assert_eq!(label("7-Iron", 15.1, 0.0), "9-Iron (-2 clubs)");
    }

    #[test]
    fn lookup_ignores_case_but_keeps_given_label() {
        assert_eq!(label("pw", 1.0, 0.0), "pw (same club)");
        assert_eq!(label("pw", -10.0, 0.0), "9-Iron (+1 club)");
    }

    #[test]
    fn clamped_at_ladder_ends() {
        assert_eq!(label("Driver", -40.0, 0.0), "Driver (+2 clubs)");
        assert_eq!(label("3-Wood", -40.0, 0.0), "Driver (+2 clubs)");
        assert_eq!(label("LW", 40.0, 0.0), "LW (-2 clubs)");
        assert_eq!(label("SW", 40.0, 0.0), "LW (-2 clubs)");
    }

    #[test]
    fn ladder_index_stays_in_bounds() {
        for club in LADDER {
            for diff in [-1e9, -100.0, -16.0, -9.0, 0.0, 9.0, 16.0, 100.0, 1e9] {
                let r = Recommendation::new(club, diff, 0.0).unwrap();
                assert!(LADDER.iter().any(|l| l.eq_ignore_ascii_case(&r.club)), "{r}");
            }
        }
    }

    #[test]
    fn larger_shortfall_never_steps_less() {
        let diffs: Vec<f64> = (0..=400).map(|i| -f64::from(i) * 0.1).collect();
        for pair in diffs.windows(2) {
            let a = Adjustment::from_carry_diff(pair[0]).steps();
            let b = Adjustment::from_carry_diff(pair[1]).steps();
            assert!(b >= a, "diff {} gave {b} steps, {} gave {a}", pair[1], pair[0]);
        }
        let diffs: Vec<f64> = (0..=400).map(|i| f64::from(i) * 0.1).collect();
        for pair in diffs.windows(2) {
            let a = Adjustment::from_carry_diff(pair[0]).steps();
            let b = Adjustment::from_carry_diff(pair[1]).steps();
            assert!(b <= a);
        }
    }

    #[test]
    fn aim_offset_direction() {
        assert_eq!(label("9-Iron", 1.0, 12.4), "9-Iron (same club), aim 12yds left");
        assert_eq!(label("9-Iron", 1.0, -12.6), "9-Iron (same club), aim 13yds right");
        assert_eq!(label("9-Iron", -10.0, -7.0), "8-Iron (+1 club), aim 7yds right");
        assert_eq!(label("9-Iron", 6.0, 6.0), "9-Iron, aim 6yds left");
    }

    #[test]
    fn small_drift_has_no_aim() {
        assert_eq!(AimOffset::for_drift(5.0), None);
        assert_eq!(AimOffset::for_drift(-5.0), None);
        assert_eq!(AimOffset::for_drift(f64::NAN), None);
        assert_eq!(
            AimOffset::for_drift(5.1),
            Some(AimOffset { yards: 5, side: Side::Left })
        );
    }

    #[test]
    fn calm_driver_keeps_driver() {
        let result = fixtures::result(230.0, 0.0, 0.0);
        let r = Recommendation::from_result("Driver", &result).unwrap();
        assert_eq!(r.to_string(), "Driver (same club)");
        assert_eq!(r.adjustment, Adjustment::SameClub);
        assert_eq!(r.aim, None);
    }

    #[test]
    fn club_off_the_ladder_is_rejected() {
        assert!(matches!(
            Recommendation::new("Putter", 0.0, 0.0),
            Err(CaddieError::NotOnLadder { .. })
        ));
    }
}
