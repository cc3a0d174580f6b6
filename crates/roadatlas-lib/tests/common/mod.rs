// Shared helpers for `roadatlas-lib` integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use roadatlas_lib::{load_road_map, CostMetric, Graph, LocationId, RoadMap, RouteMetrics};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load the checked-in Illinois fixture network.
pub fn fixture_map() -> RoadMap {
    load_road_map(
        &fixtures_dir().join("city-gps.txt"),
        &fixtures_dir().join("road-segments.txt"),
    )
    .expect("fixture tables load")
}

/// Exhaustive minimum over all simple paths; oracle for the search engine.
pub fn brute_force_minimum(
    map: &RoadMap,
    graph: &Graph,
    start: LocationId,
    goal: LocationId,
    metric: CostMetric,
) -> Option<f64> {
    let mut visited = vec![false; map.locations.len()];
    visited[start] = true;
    let mut best = None;
    explore(
        graph,
        start,
        goal,
        metric,
        RouteMetrics::default(),
        &mut visited,
        &mut best,
    );
    best
}

fn explore(
    graph: &Graph,
    current: LocationId,
    goal: LocationId,
    metric: CostMetric,
    metrics: RouteMetrics,
    visited: &mut Vec<bool>,
    best: &mut Option<f64>,
) {
    if current == goal {
        let total = metric.objective(&metrics);
        if best.map_or(true, |known| total < known) {
            *best = Some(total);
        }
        return;
    }
    for edge in graph.neighbours(current) {
        if visited[edge.target] {
            continue;
        }
        visited[edge.target] = true;
        explore(
            graph,
            edge.target,
            goal,
            metric,
            metrics.extend(edge),
            visited,
            best,
        );
        visited[edge.target] = false;
    }
}
