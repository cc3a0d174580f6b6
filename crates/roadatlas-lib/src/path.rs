use std::collections::HashMap;

use crate::cost::{CostMetric, RouteMetrics};
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::map::{LocationId, RoadMap};

/// Outcome of a successful search: accumulated totals plus the locations
/// visited after the start, in order, ending with the goal. An empty path
/// means start and goal coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub metrics: RouteMetrics,
    pub path: Vec<LocationId>,
}

/// Run A* from `start` to `goal`, minimizing the selected metric.
///
/// All four totals accumulate on every traversal so the result reports them
/// regardless of the objective. The first pop of the goal carries the true
/// minimum cost for the selected metric as long as the heuristic never
/// overestimates. Returns `None` when the frontier is exhausted without
/// reaching the goal.
pub fn find_route_a_star(
    map: &RoadMap,
    graph: &Graph,
    start: LocationId,
    goal: LocationId,
    metric: CostMetric,
) -> Option<SearchResult> {
    let max_speed_limit = graph.max_speed_limit();
    let mut frontier = Frontier::new();
    let mut parents: HashMap<LocationId, LocationId> = HashMap::new();

    frontier.insert_or_improve(start, 0.0, RouteMetrics::default());

    while let Some(entry) = frontier.pop_best() {
        if entry.location == goal {
            return Some(SearchResult {
                metrics: entry.metrics,
                path: reconstruct_path(&parents, start, goal),
            });
        }

        for edge in graph.neighbours(entry.location) {
            let next = edge.target;
            let metrics = entry.metrics.extend(edge);
            let priority =
                metric.objective(&metrics) + metric.estimate(map, next, goal, max_speed_limit);
            if frontier.insert_or_improve(next, priority, metrics) {
                parents.insert(next, entry.location);
            }
        }
    }

    None
}

/// Walk parent pointers back from the goal. The start is excluded from the
/// returned path.
fn reconstruct_path(
    parents: &HashMap<LocationId, LocationId>,
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        let Some(&parent) = parents.get(&current) else {
            break;
        };
        current = parent;
    }
    path.reverse();
    path
}
