//! Cost strategies: one accumulation function and one admissible heuristic
//! per objective.
//!
//! The four objectives are structurally identical, so they live in a single
//! closed enum with two methods. The engine itself stays strategy-agnostic.

use std::fmt;

use serde::Serialize;

use crate::graph::Edge;
use crate::map::{LocationId, RoadMap};

/// Objective minimized by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostMetric {
    /// Fewest road segments. Zero heuristic, so the search degrades to
    /// uniform-cost over edge count.
    Segments,
    /// Shortest total distance in miles.
    #[default]
    Distance,
    /// Fastest total travel time in hours.
    Time,
    /// Least fuel burned in gallons.
    Mpg,
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostMetric::Segments => "segments",
            CostMetric::Distance => "distance",
            CostMetric::Time => "time",
            CostMetric::Mpg => "mpg",
        };
        f.write_str(value)
    }
}

/// Running totals tracked for every candidate path.
///
/// All four accumulate on each traversal regardless of the objective, since
/// the final answer reports all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct RouteMetrics {
    pub segments: u32,
    pub miles: f64,
    pub hours: f64,
    pub gallons: f64,
}

impl RouteMetrics {
    /// Totals after traversing one more edge.
    pub fn extend(&self, edge: &Edge) -> Self {
        Self {
            segments: self.segments + 1,
            miles: self.miles + edge.length_miles,
            hours: self.hours + edge.length_miles / edge.speed_limit_mph,
            gallons: self.gallons
                + edge.length_miles / fuel_efficiency_mpg(edge.speed_limit_mph),
        }
    }
}

/// Miles-per-gallon model: `400 * (v/150) * (1 - v/150)^4`, unimodal in speed
/// with its peak at 30 mph.
pub fn fuel_efficiency_mpg(speed_mph: f64) -> f64 {
    let ratio = speed_mph / 150.0;
    400.0 * ratio * (1.0 - ratio).powi(4)
}

impl CostMetric {
    /// Extract the accumulated cost for this objective (the g-value).
    pub fn objective(&self, metrics: &RouteMetrics) -> f64 {
        match self {
            CostMetric::Segments => f64::from(metrics.segments),
            CostMetric::Distance => metrics.miles,
            CostMetric::Time => metrics.hours,
            CostMetric::Mpg => metrics.gallons,
        }
    }

    /// Lower bound on the remaining cost from `from` to `goal` (the h-value).
    ///
    /// The time and fuel estimates divide the straight-line distance by the
    /// network-wide maximum speed limit and by the efficiency at that speed.
    /// Coarse bounds, but never an overestimate. Locations without
    /// coordinates estimate zero.
    pub fn estimate(
        &self,
        map: &RoadMap,
        from: LocationId,
        goal: LocationId,
        max_speed_limit: f64,
    ) -> f64 {
        let Some(straight_line) = map.straight_line(from, goal) else {
            return 0.0;
        };
        match self {
            CostMetric::Segments => 0.0,
            CostMetric::Distance => straight_line,
            CostMetric::Time => straight_line / max_speed_limit,
            CostMetric::Mpg => {
                let best_efficiency = fuel_efficiency_mpg(max_speed_limit);
                if best_efficiency > 0.0 {
                    straight_line / best_efficiency
                } else {
                    0.0
                }
            }
        }
    }
}
