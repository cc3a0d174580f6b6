//! Roadatlas library entry points.
//!
//! This crate exposes helpers to load a road network from its two text
//! tables, build the adjacency graph, and plan minimum-cost routes under a
//! selectable objective. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;

pub use cost::{fuel_efficiency_mpg, CostMetric, RouteMetrics};
pub use error::{Error, Result};
pub use frontier::{Frontier, FrontierEntry};
pub use graph::{build_graph, Edge, Graph};
pub use map::{load_road_map, Coordinates, Location, LocationId, RoadMap, SegmentRecord};
pub use output::{RouteStep, RouteSummary};
pub use path::{find_route_a_star, SearchResult};
pub use routing::{plan_route, RoutePlan, RouteRequest};
