//! High-level route planning: name resolution, search, and plan assembly.
//!
//! Consumers hand a [`RouteRequest`] to [`plan_route`] and get back a
//! [`RoutePlan`] with the full visited sequence and all four accumulated
//! totals, or a structured error.

use serde::Serialize;
use tracing::debug;

use crate::cost::{CostMetric, RouteMetrics};
use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::map::{LocationId, RoadMap};
use crate::path::find_route_a_star;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub metric: CostMetric,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, metric: CostMetric) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            metric,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub metric: CostMetric,
    pub start: LocationId,
    pub goal: LocationId,
    /// Every location visited, start and goal inclusive.
    pub steps: Vec<LocationId>,
    pub metrics: RouteMetrics,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a location name to its identifier, attaching fuzzy suggestions to
/// the error for unknown names.
fn resolve_location(map: &RoadMap, name: &str) -> Result<LocationId> {
    map.location_id(name).ok_or_else(|| {
        let suggestions = map.fuzzy_location_matches(name, 3);
        Error::UnknownLocation {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Compute a route using the requested metric.
///
/// Resolves both endpoint names before any search state is constructed,
/// builds the adjacency graph, and runs the search engine. An exhausted
/// search maps to [`Error::RouteNotFound`], a negative answer rather than a
/// fault.
pub fn plan_route(map: &RoadMap, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_location(map, &request.start)?;
    let goal_id = resolve_location(map, &request.goal)?;

    debug!(
        start = %request.start,
        goal = %request.goal,
        metric = %request.metric,
        "planning route"
    );

    let graph = build_graph(map);
    let result = find_route_a_star(map, &graph, start_id, goal_id, request.metric).ok_or_else(
        || Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        },
    )?;

    let mut steps = Vec::with_capacity(result.path.len() + 1);
    steps.push(start_id);
    steps.extend(result.path.iter().copied());

    Ok(RoutePlan {
        metric: request.metric,
        start: start_id,
        goal: goal_id,
        steps,
        metrics: result.metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            metric: CostMetric::Distance,
            start: 0,
            goal: 2,
            steps: vec![0, 1, 2],
            metrics: RouteMetrics::default(),
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn trivial_route_plan_has_zero_hops() {
        let plan = RoutePlan {
            metric: CostMetric::Segments,
            start: 0,
            goal: 0,
            steps: vec![0],
            metrics: RouteMetrics::default(),
        };
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn unknown_start_fails_before_searching() {
        let mut map = RoadMap::default();
        map.add_segment("A", "B", 10.0, 50.0, "US-1");

        let request = RouteRequest::new("Nowhere", "B", CostMetric::Distance);
        let err = plan_route(&map, &request).expect_err("unknown start");
        assert!(matches!(err, Error::UnknownLocation { .. }));
    }
}
