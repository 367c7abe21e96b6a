//! Club reference table and the club ladder used for recommendation stepping.

use std::fmt;

use crate::error::{CaddieError, Result};

/// Standard calm-air profile for one club (average amateur numbers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Club {
    /// Lookup key, e.g. `"7-iron"`.
    pub key: &'static str,
    /// Ball speed (mph)
    pub ball_speed_mph: f64,
    /// Launch angle (deg)
    pub launch_angle_deg: f64,
    /// Spin rate (rpm)
    pub spin_rate_rpm: f64,
    /// Calm-air carry (yards)
    pub carry_yards: f64,
    /// Display name, e.g. `"7-Iron"`. Always a [`LADDER`] entry.
    pub name: &'static str,
}

const fn club(
    key: &'static str,
    ball_speed_mph: f64,
    launch_angle_deg: f64,
    spin_rate_rpm: f64,
    carry_yards: f64,
    name: &'static str,
) -> Club {
    Club { key, ball_speed_mph, launch_angle_deg, spin_rate_rpm, carry_yards, name }
}

/// Every club in the bag, longest first.
pub static CLUBS: [Club; 13] = [
    club("driver", 143.0, 11.0, 2700.0, 230.0, "Driver"),
    club("3-wood", 132.0, 11.5, 3500.0, 215.0, "3-Wood"),
    club("5-wood", 125.0, 13.0, 4000.0, 200.0, "5-Wood"),
    club("4-iron", 118.0, 14.0, 4500.0, 185.0, "4-Iron"),
    club("5-iron", 113.0, 15.0, 5000.0, 175.0, "5-Iron"),
    club("6-iron", 107.0, 17.0, 5500.0, 165.0, "6-Iron"),
    club("7-iron", 101.0, 19.0, 6500.0, 155.0, "7-Iron"),
    club("8-iron", 95.0, 21.0, 7500.0, 145.0, "8-Iron"),
    club("9-iron", 89.0, 24.0, 8500.0, 135.0, "9-Iron"),
    club("pw", 83.0, 27.0, 9000.0, 125.0, "PW"),
    club("gw", 76.0, 30.0, 9500.0, 110.0, "GW"),
    club("sw", 68.0, 33.0, 10000.0, 95.0, "SW"),
    club("lw", 60.0, 36.0, 10500.0, 80.0, "LW"),
];

/// Club labels ordered from lob wedge (index 0) to driver (index 12).
///
/// Stepping up the ladder means taking a longer club.
pub static LADDER: [&str; 13] = [
    "LW", "SW", "GW", "PW", "9-Iron", "8-Iron", "7-Iron", "6-Iron", "5-Iron", "4-Iron", "5-Wood",
    "3-Wood", "Driver",
];

impl Club {
    /// Look up a club by its exact key.
    pub fn from_key(key: &str) -> Result<&'static Club> {
        CLUBS
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| CaddieError::UnknownClub { key: key.to_string() })
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Find a club label on the ladder, ignoring ASCII case.
pub fn ladder_index(label: &str) -> Result<usize> {
    LADDER
        .iter()
        .position(|l| l.eq_ignore_ascii_case(label))
        .ok_or_else(|| CaddieError::NotOnLadder { label: label.to_string() })
}

/// Move `steps` rungs from `index` (positive = longer club), clamped to the ladder ends.
pub fn ladder_step(index: usize, steps: i32) -> usize {
    let last = (LADDER.len() - 1) as i64;
    (index as i64 + i64::from(steps)).clamp(0, last) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_key() {
        let c = Club::from_key("7-iron").unwrap();
        assert_eq!(c.name, "7-Iron");
        assert_eq!(c.ball_speed_mph, 101.0);
        assert_eq!(c.carry_yards, 155.0);
    }

    #[test]
    fn unknown_key() {
        assert!(matches!(
            Club::from_key("putter"),
            Err(CaddieError::UnknownClub { ref key }) if key == "putter"
        ));
        // Keys are exact; display names are not keys.
        assert!(Club::from_key("7-Iron").is_err());
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in CLUBS.iter().enumerate() {
            for b in &CLUBS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn ladder_is_bag_reversed() {
        let names: Vec<&str> = CLUBS.iter().rev().map(|c| c.name).collect();
        assert_eq!(names, LADDER);
        // CLUBS is longest-first, the ladder shortest-first.
        for (pos, c) in CLUBS.iter().enumerate() {
            assert_eq!(ladder_index(c.name).unwrap(), LADDER.len() - 1 - pos);
        }
    }

    #[test]
    fn ladder_lookup_ignores_case() {
        assert_eq!(ladder_index("pw").unwrap(), 3);
        assert_eq!(ladder_index("7-IRON").unwrap(), 6);
        assert_eq!(ladder_index("Driver").unwrap(), 12);
        assert!(ladder_index("Hybrid").is_err());
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        assert_eq!(ladder_step(6, 2), 8);
        assert_eq!(ladder_step(6, -1), 5);
        assert_eq!(ladder_step(12, 2), 12);
        assert_eq!(ladder_step(11, 2), 12);
        assert_eq!(ladder_step(0, -2), 0);
        assert_eq!(ladder_step(1, -2), 0);
        assert_eq!(ladder_step(5, i32::MAX), 12);
        assert_eq!(ladder_step(5, i32::MIN), 0);
    }
}
