use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadatlas_lib::{
    load_road_map, plan_route, CostMetric, Error as LibError, RouteRequest, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan minimum-cost routes on a road network")]
struct Cli {
    /// Starting location name.
    start: String,
    /// Destination location name.
    end: String,
    /// Objective to minimize.
    #[arg(value_enum)]
    metric: MetricArg,

    /// Location table (`<name> <latitude> <longitude>` rows).
    #[arg(long, default_value = "city-gps.txt")]
    locations: PathBuf,

    /// Segment table (`<city1> <city2> <length> <speed> <class>` rows).
    #[arg(long, default_value = "road-segments.txt")]
    segments: PathBuf,

    /// Output rendering.
    #[arg(long, value_enum, default_value = "plain")]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MetricArg {
    Segments,
    Distance,
    Time,
    Mpg,
}

impl From<MetricArg> for CostMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Segments => CostMetric::Segments,
            MetricArg::Distance => CostMetric::Distance,
            MetricArg::Time => CostMetric::Time,
            MetricArg::Mpg => CostMetric::Mpg,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Plain,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map = load_road_map(&cli.locations, &cli.segments).with_context(|| {
        format!(
            "failed to load road network from {} and {}",
            cli.locations.display(),
            cli.segments.display()
        )
    })?;

    let request = RouteRequest::new(cli.start, cli.end, cli.metric.into());
    let plan = match plan_route(&map, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(route_failure(err)),
    };

    let summary = RouteSummary::from_plan(&map, &plan)
        .context("failed to build route summary for display")?;

    match cli.format {
        Format::Plain => println!("{}", summary.render_plain()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn route_failure(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        LibError::RouteNotFound { start, goal } => {
            anyhow::anyhow!("No route found between {} and {}.", start, goal)
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = if suggestions.len() == 1 {
            format!("Did you mean '{}'?", suggestions[0])
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
