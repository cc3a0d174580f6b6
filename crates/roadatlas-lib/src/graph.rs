use crate::map::{LocationId, RoadMap};

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: LocationId,
    pub length_miles: f64,
    pub speed_limit_mph: f64,
    pub road_class: String,
}

/// Adjacency structure used by the search engine.
///
/// Built once from the parsed segment table and read-only afterwards, so it
/// may be shared freely across independent queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    max_speed_limit: f64,
}

impl Graph {
    /// Return the neighbours for a given location identifier.
    pub fn neighbours(&self, location: LocationId) -> &[Edge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Highest speed limit observed on any segment in the network. Feeds the
    /// time and fuel heuristics.
    pub fn max_speed_limit(&self) -> f64 {
        self.max_speed_limit
    }
}

/// Build the bidirectional adjacency structure from the parsed segment table.
///
/// Every segment (A,B) yields both an A to B and a B to A entry with
/// identical length, speed limit, and road class.
pub fn build_graph(map: &RoadMap) -> Graph {
    let mut adjacency = vec![Vec::new(); map.locations.len()];
    let mut max_speed_limit: f64 = 0.0;

    for segment in &map.segments {
        max_speed_limit = max_speed_limit.max(segment.speed_limit_mph);
        adjacency[segment.from].push(Edge {
            target: segment.to,
            length_miles: segment.length_miles,
            speed_limit_mph: segment.speed_limit_mph,
            road_class: segment.road_class.clone(),
        });
        adjacency[segment.to].push(Edge {
            target: segment.from,
            length_miles: segment.length_miles,
            speed_limit_mph: segment.speed_limit_mph,
            road_class: segment.road_class.clone(),
        });
    }

    Graph {
        adjacency,
        max_speed_limit,
    }
}
