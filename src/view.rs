//! View model for one evaluated scenario.
//!
//! [`ScenarioView::build`] is a pure function of the selection and the
//! service result. A renderer (the CLI, a web template) only reads it.

use serde::Serialize;

use crate::error::Result;
use crate::explain::Explanation;
use crate::format::{ConditionPills, Delta, ImpactBar, StatPanel, whole};
use crate::recommend::Recommendation;
use crate::scenario::Selection;
use crate::trajectory::{TrajectoryPoint, TrajectoryResult};

/// Stats for one flight plus the club label shown with them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub stats: StatPanel,
    pub club: String,
}

/// Adjusted minus baseline, per stat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deltas {
    pub carry: Delta,
    pub total: Delta,
    pub apex: Delta,
    /// Signed adjusted drift (not a difference).
    pub drift: Delta,
    pub flight_time: Delta,
    pub landing_angle: Delta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactBars {
    pub wind: ImpactBar,
    pub temperature: ImpactBar,
    pub altitude: ImpactBar,
    pub humidity: ImpactBar,
}

/// Everything needed to show one evaluated shot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioView {
    pub title: String,
    pub description: String,
    /// Baseline flight with the standard club.
    pub standard: PanelView,
    /// Adjusted flight with the recommended club text.
    pub adjusted: PanelView,
    pub recommendation: Recommendation,
    pub deltas: Deltas,
    pub conditions: ConditionPills,
    pub impact: ImpactBars,
    /// Canned advice for presets, generated for custom shots.
    pub explanation: String,
    /// The service's calm-air equivalent distance, when it sends one.
    pub plays_like_yards: Option<i64>,
    /// Sideways push from the wind (`"+3.2 yds"`), when the service sends it.
    pub wind_push: Option<Delta>,
    /// Sampled adjusted flight path for plotting. Empty if not sent.
    pub flight_path: Vec<TrajectoryPoint>,
}

impl ScenarioView {
    pub fn build(selection: &Selection, result: &TrajectoryResult) -> Result<Self> {
        let standard_club = selection.standard_club()?;
        let conditions = selection.conditions();
        let recommendation = Recommendation::from_result(standard_club, result)?;
        let (base, adj) = (&result.baseline, &result.adjusted);
        let impact = &result.impact_breakdown;

        let explanation = match selection.canned_explanation() {
            Some(text) => text.to_string(),
            None => Explanation::generate(result, &conditions).to_string(),
        };

        Ok(Self {
            title: selection.title()?,
            description: selection.description()?,
            standard: PanelView {
                stats: StatPanel::new(base),
                club: standard_club.to_string(),
            },
            adjusted: PanelView {
                stats: StatPanel::new(adj),
                club: recommendation.to_string(),
            },
            deltas: Deltas {
                carry: Delta::new(adj.carry_yards - base.carry_yards, ""),
                total: Delta::new(adj.total_yards - base.total_yards, ""),
                apex: Delta::new(adj.apex_height_yards - base.apex_height_yards, ""),
                drift: Delta::new(adj.lateral_drift_yards, ""),
                flight_time: Delta::new(adj.flight_time_seconds - base.flight_time_seconds, ""),
                landing_angle: Delta::new(adj.landing_angle_deg - base.landing_angle_deg, "°"),
            },
            conditions: ConditionPills::new(&conditions),
            impact: ImpactBars {
                wind: ImpactBar::new(impact.wind_effect_yards),
                temperature: ImpactBar::new(impact.temperature_effect_yards),
                altitude: ImpactBar::new(impact.altitude_effect_yards),
                humidity: ImpactBar::new(impact.humidity_effect_yards),
            },
            explanation,
            plays_like_yards: result.equivalent_calm_distance_yards.map(whole),
            wind_push: impact.wind_lateral_yards.map(|yards| Delta::new(yards, " yds")),
            flight_path: result.trajectory_points.clone(),
            recommendation,
        })
    }
}
