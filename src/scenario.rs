//! Preset scenarios and custom shot setups.
//!
//! Either one becomes a [`Selection`], which knows how to build its
//! trajectory request and what to show in the header.

use crate::club::Club;
use crate::conditions::{Conditions, STANDARD_PRESSURE_INHG};
use crate::error::{CaddieError, Result};
use crate::shot::ShotParameters;
use crate::trajectory::TrajectoryRequest;

/// A fixed, hand-written scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub id: usize,
    pub title: &'static str,
    pub description: &'static str,
    /// Club key into [`CLUBS`](crate::club::CLUBS).
    pub club: &'static str,
    pub target_carry_yards: f64,
    pub conditions: Conditions,
    /// Ladder label of the club normally hit from this distance.
    pub standard_club: &'static str,
    /// Hand-written advice shown instead of a generated explanation.
    pub explanation: &'static str,
}

const fn conditions(
    wind_speed_mph: f64,
    wind_direction_deg: f64,
    temperature_f: f64,
    altitude_ft: f64,
    humidity_pct: f64,
    pressure_inhg: f64,
) -> Conditions {
    Conditions {
        wind_speed_mph,
        wind_direction_deg,
        temperature_f,
        altitude_ft,
        humidity_pct,
        pressure_inhg,
    }
}

pub static SCENARIOS: [Scenario; 7] = [
    Scenario {
        id: 0,
        title: "7-Iron • 165 Yards • Strong Headwind",
        description: "Your standard 7-iron flies 165 yards in calm conditions. But what happens \
            when you're facing a 20 mph headwind at sea level? The ball fights through dense air \
            and loses significant distance.",
        club: "7-iron",
        target_carry_yards: 165.0,
        conditions: conditions(20.0, 0.0, 70.0, 0.0, 50.0, 29.92),
        standard_club: "7-Iron",
        explanation: "The 20 mph headwind is costing you significant carry distance. Your 7-iron \
            that normally flies 165 yards will come up well short. Club up two clubs to reach \
            your target. The ball will land steeper which means less roll - that's helpful for \
            holding the green.",
    },
    Scenario {
        id: 1,
        title: "6-Iron • 175 Yards • Denver Summer",
        description: "Playing at 5,280 feet in the Colorado summer. The thin, warm air means your \
            ball will fly much further than the yardage suggests - but how much further?",
        club: "6-iron",
        target_carry_yards: 175.0,
        conditions: conditions(5.0, 180.0, 85.0, 5280.0, 25.0, 29.5),
        standard_club: "6-Iron",
        explanation: "At 5,280 feet (one mile high), the air is 15-17% thinner than at sea level. \
            Combined with the warm 85°F temperature and slight tailwind, your ball will fly \
            significantly further. Club down - your 6-iron will play like a 5-iron here.",
    },
    Scenario {
        id: 2,
        title: "8-Iron • 150 Yards • Cold Morning",
        description: "An early morning tee time in 45°F weather. Cold air is dense air, and your \
            ball won't fly as far. Plus the ball itself is colder and less responsive.",
        club: "8-iron",
        target_carry_yards: 150.0,
        conditions: conditions(5.0, 0.0, 45.0, 500.0, 70.0, 30.1),
        standard_club: "8-Iron",
        explanation: "Cold 45°F air is significantly denser than warm air, creating more drag on \
            your ball. Combined with the light headwind, expect to lose distance. Take one more \
            club than normal. Pro tip: keep your balls warm in your pocket between shots.",
    },
    Scenario {
        id: 3,
        title: "9-Iron • 140 Yards • Crosswind",
        description: "A 15 mph left-to-right crosswind. The ball will drift sideways during \
            flight. How much should you aim left to compensate?",
        club: "9-iron",
        target_carry_yards: 140.0,
        conditions: conditions(15.0, 90.0, 72.0, 300.0, 55.0, 29.92),
        standard_club: "9-Iron",
        explanation: "The 15 mph crosswind will push your ball significantly right during its 4+ \
            seconds of flight. Aim left of your target to allow for the drift. Distance won't \
            change much, but accuracy is the challenge here.",
    },
    Scenario {
        id: 4,
        title: "Pebble Beach #7 • PW • 107 Yards",
        description: "The famous downhill par 3 overlooking the Pacific Ocean. Coastal winds \
            swirl around this exposed green, making club selection tricky even for the pros.",
        club: "pw",
        target_carry_yards: 107.0,
        conditions: conditions(15.0, 45.0, 58.0, 75.0, 75.0, 30.0),
        standard_club: "PW",
        explanation: "The quartering wind off the Pacific costs you distance AND pushes the ball \
            right. The cool, humid coastal air is dense. Club up to a 9-iron and aim at the left \
            edge - let the wind bring it back. The tiny green demands precision.",
    },
    Scenario {
        id: 5,
        title: "St Andrews #11 • 7-Iron • 172 Yards",
        description: "The Old Course's famous par 3, with its hidden Strath bunker and swirling \
            Scottish winds. Links golf at its finest - and most unpredictable.",
        club: "7-iron",
        target_carry_yards: 172.0,
        conditions: conditions(22.0, 315.0, 52.0, 30.0, 80.0, 29.8),
        standard_club: "7-Iron",
        explanation: "Scottish links wind is relentless. The 22 mph quartering wind costs distance \
            AND pushes left. Cold, damp air adds drag. Take two extra clubs and hit a lower, \
            punchy shot to reduce wind effect. Aim right and let the wind work the ball back.",
    },
    Scenario {
        id: 6,
        title: "TPC Sawgrass #17 • 9-Iron • 137 Yards",
        description: "The most famous island green in golf. Wind swirls in the amphitheater \
            setting, and there's no bailout. Miss the green and you're wet.",
        club: "9-iron",
        target_carry_yards: 137.0,
        conditions: conditions(12.0, 225.0, 78.0, 15.0, 70.0, 29.95),
        standard_club: "9-Iron",
        explanation: "The helping wind will add distance - don't fly it over the green into the \
            water. The wind also pushes left, so favor the right side. Humid Florida air helps \
            slightly. Take less club and aim right-center. The Sunday pin is always back-left \
            for drama.",
    },
];

impl Scenario {
    pub fn by_id(id: usize) -> Result<&'static Scenario> {
        SCENARIOS.get(id).ok_or(CaddieError::UnknownScenario { id })
    }

    pub fn request(&self) -> Result<TrajectoryRequest> {
        self.conditions.validate()?;
        Ok(TrajectoryRequest {
            shot: ShotParameters::derive(self.club, self.target_carry_yards)?,
            conditions: self.conditions,
        })
    }
}

/// A golfer-built setup: any club, any carry, any weather.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomShot {
    /// Club key
    pub club: String,
    pub target_carry_yards: f64,
    pub wind_speed_mph: f64,
    pub wind_direction_deg: f64,
    pub temperature_f: f64,
    pub altitude_ft: f64,
    pub humidity_pct: f64,
}

impl CustomShot {
    /// Start from a club's standard carry in calm air.
    pub fn for_club(key: &str) -> Result<Self> {
        let club = Club::from_key(key)?;
        let calm = Conditions::calm();
        Ok(Self {
            club: club.key.to_string(),
            target_carry_yards: club.carry_yards,
            wind_speed_mph: calm.wind_speed_mph,
            wind_direction_deg: calm.wind_direction_deg,
            temperature_f: calm.temperature_f,
            altitude_ft: calm.altitude_ft,
            humidity_pct: calm.humidity_pct,
        })
    }

    /// Conditions to send. Pressure is always standard.
    pub fn conditions(&self) -> Conditions {
        Conditions {
            wind_speed_mph: self.wind_speed_mph,
            wind_direction_deg: self.wind_direction_deg,
            temperature_f: self.temperature_f,
            altitude_ft: self.altitude_ft,
            humidity_pct: self.humidity_pct,
            pressure_inhg: STANDARD_PRESSURE_INHG,
        }
    }

    pub fn request(&self) -> Result<TrajectoryRequest> {
        let conditions = self.conditions();
        conditions.validate()?;
        Ok(TrajectoryRequest {
            shot: ShotParameters::derive(&self.club, self.target_carry_yards)?,
            conditions,
        })
    }
}

/// What the golfer asked to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Preset(&'static Scenario),
    Custom(CustomShot),
}

impl Selection {
    pub fn preset(id: usize) -> Result<Self> {
        Scenario::by_id(id).map(Self::Preset)
    }

    /// Build the trajectory request, rejecting bad input before any I/O.
    pub fn request(&self) -> Result<TrajectoryRequest> {
        match self {
            Self::Preset(s) => s.request(),
            Self::Custom(c) => c.request(),
        }
    }

    pub fn conditions(&self) -> Conditions {
        match self {
            Self::Preset(s) => s.conditions,
            Self::Custom(c) => c.conditions(),
        }
    }

    /// Ladder label of the club the golfer would normally hit.
    pub fn standard_club(&self) -> Result<&'static str> {
        match self {
            Self::Preset(s) => Ok(s.standard_club),
            Self::Custom(c) => Ok(Club::from_key(&c.club)?.name),
        }
    }

    pub fn title(&self) -> Result<String> {
        match self {
            Self::Preset(s) => Ok(s.title.to_string()),
            Self::Custom(c) => Ok(format!(
                "{} • {} Yards • Custom Conditions",
                self.standard_club()?,
                c.target_carry_yards
            )),
        }
    }

    pub fn description(&self) -> Result<String> {
        match self {
            Self::Preset(s) => Ok(s.description.to_string()),
            Self::Custom(c) => Ok(format!(
                "Testing your {} that carries {} yards in calm conditions. See how your custom \
                 weather conditions affect the shot.",
                self.standard_club()?,
                c.target_carry_yards
            )),
        }
    }

    /// Hand-written advice for presets; custom shots get a generated one.
    pub fn canned_explanation(&self) -> Option<&'static str> {
        match self {
            Self::Preset(s) => Some(s.explanation),
            Self::Custom(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::ladder_index;

    #[test]
    fn presets_are_consistent() {
        for (i, s) in SCENARIOS.iter().enumerate() {
            assert_eq!(s.id, i);
            let club = Club::from_key(s.club).unwrap();
            assert_eq!(club.name, s.standard_club, "{}", s.title);
            assert!(ladder_index(s.standard_club).is_ok());
            assert!(s.request().is_ok(), "{}", s.title);
            assert!(!s.explanation.contains('<'), "markup in {}", s.title);
        }
    }

    #[test]
    fn strong_headwind_request() {
        let req = Scenario::by_id(0).unwrap().request().unwrap();
        assert_eq!(req.shot.ball_speed_mph, 104.0);
        assert_eq!(req.conditions.wind_speed_mph, 20.0);
        assert_eq!(req.conditions.wind_direction_deg, 0.0);
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(Selection::preset(7), Err(CaddieError::UnknownScenario { id: 7 })));
    }

    #[test]
    fn custom_defaults_to_standard_carry() {
        let c = CustomShot::for_club("5-wood").unwrap();
        assert_eq!(c.target_carry_yards, 200.0);
        assert_eq!(c.conditions(), Conditions::calm());
        assert!(CustomShot::for_club("hybrid").is_err());
    }

    #[test]
    fn custom_header_text() {
        let shot = CustomShot { target_carry_yards: 150.0, ..CustomShot::for_club("8-iron").unwrap() };
        let sel = Selection::Custom(shot);
        assert_eq!(sel.title().unwrap(), "8-Iron • 150 Yards • Custom Conditions");
        assert_eq!(
            sel.description().unwrap(),
            "Testing your 8-Iron that carries 150 yards in calm conditions. See how your custom \
             weather conditions affect the shot."
        );
        assert_eq!(sel.canned_explanation(), None);
    }

    #[test]
    fn custom_always_uses_standard_pressure() {
        let shot = CustomShot { altitude_ft: 7000.0, ..CustomShot::for_club("pw").unwrap() };
        assert_eq!(shot.request().unwrap().conditions.pressure_inhg, 29.92);
    }

    #[test]
    fn custom_rejects_bad_input_before_io() {
        let shot = CustomShot { target_carry_yards: 0.0, ..CustomShot::for_club("pw").unwrap() };
        assert!(matches!(shot.request(), Err(CaddieError::InvalidCarry { .. })));

        let shot = CustomShot { temperature_f: f64::NAN, ..CustomShot::for_club("pw").unwrap() };
        assert!(matches!(shot.request(), Err(CaddieError::InvalidCondition { .. })));
    }
}
