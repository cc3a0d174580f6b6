//! Structured route summaries for rendering and serialization.

use std::fmt::Write;

use serde::Serialize;

use crate::cost::{CostMetric, RouteMetrics};
use crate::error::{Error, Result};
use crate::map::{LocationId, RoadMap};
use crate::routing::RoutePlan;

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    pub name: String,
}

/// Representation of a planned route that higher-level consumers can render
/// or serialize.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub metric: CostMetric,
    pub metrics: RouteMetrics,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved location names.
    pub fn from_plan(map: &RoadMap, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| RouteStep {
                index,
                id,
                name: map
                    .location_name(id)
                    .unwrap_or("<unknown>")
                    .to_string(),
            })
            .collect();

        Ok(Self {
            metric: plan.metric,
            metrics: plan.metrics,
            steps,
        })
    }

    /// Render the single-line plain format:
    ///
    /// `<segments> <miles> <hours> <gallons> <start> <city-1> ... <goal>`
    ///
    /// Hours and gallons are rounded to four decimal places for display.
    pub fn render_plain(&self) -> String {
        let mut line = format!(
            "{} {} {:.4} {:.4}",
            self.metrics.segments, self.metrics.miles, self.metrics.hours, self.metrics.gallons
        );
        for step in &self.steps {
            let _ = write!(line, " {}", step.name);
        }
        line
    }
}
