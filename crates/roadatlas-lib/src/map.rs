use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Dense index assigned to each named location at load time.
pub type LocationId = usize;

/// Minimum Jaro-Winkler similarity for a name to count as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Planar Euclidean distance to another coordinate pair, computed over
    /// raw decimal degrees.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// A named place on the road network. Locations referenced only by the
/// segment table carry no coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub coordinates: Option<Coordinates>,
}

/// One undirected road segment between two locations. Traversable in both
/// directions with identical cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRecord {
    pub from: LocationId,
    pub to: LocationId,
    pub length_miles: f64,
    pub speed_limit_mph: f64,
    pub road_class: String,
}

/// In-memory representation of the road network tables. Read-only once
/// loaded; the search engine never mutates it.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    pub locations: Vec<Location>,
    pub name_to_id: HashMap<String, LocationId>,
    pub segments: Vec<SegmentRecord>,
}

impl RoadMap {
    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(id).map(|location| location.name.as_str())
    }

    /// Coordinates for a location, when the location table provided them.
    pub fn coordinates(&self, id: LocationId) -> Option<Coordinates> {
        self.locations.get(id).and_then(|location| location.coordinates)
    }

    /// Straight-line distance between two locations over their decimal-degree
    /// coordinates, or `None` when either endpoint lacks coordinates.
    pub fn straight_line(&self, a: LocationId, b: LocationId) -> Option<f64> {
        match (self.coordinates(a), self.coordinates(b)) {
            (Some(from), Some(to)) => Some(from.distance_to(&to)),
            _ => None,
        }
    }

    /// Return up to `limit` known location names similar to `name`, best
    /// matches first. Used to attach suggestions to unknown-location errors.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|location| {
                let score = strsim::jaro_winkler(&wanted, &location.name.to_lowercase());
                (score, location.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Register a location, overwriting the coordinates of an earlier record
    /// with the same name.
    pub fn add_location(&mut self, name: &str, coordinates: Option<Coordinates>) -> LocationId {
        let id = self.intern(name);
        self.locations[id].coordinates = coordinates;
        id
    }

    /// Register an undirected segment, interning both endpoint names.
    pub fn add_segment(
        &mut self,
        from: &str,
        to: &str,
        length_miles: f64,
        speed_limit_mph: f64,
        road_class: &str,
    ) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.segments.push(SegmentRecord {
            from,
            to,
            length_miles,
            speed_limit_mph,
            road_class: road_class.to_string(),
        });
    }

    fn intern(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.locations.len();
        self.locations.push(Location {
            id,
            name: name.to_string(),
            coordinates: None,
        });
        self.name_to_id.insert(name.to_string(), id);
        id
    }
}

/// Load the location and segment tables into memory.
///
/// Both files are whitespace-separated text. Malformed rows (wrong field
/// count, non-numeric fields, non-positive lengths or speed limits) abort the
/// load with [`Error::MalformedRecord`] before any search state exists.
/// Duplicate location rows overwrite earlier coordinates; blank lines are
/// skipped.
pub fn load_road_map(locations_path: &Path, segments_path: &Path) -> Result<RoadMap> {
    let mut map = RoadMap::default();
    load_locations(&mut map, locations_path)?;
    load_segments(&mut map, segments_path)?;

    debug!(
        locations = map.locations.len(),
        segments = map.segments.len(),
        "loaded road network"
    );

    Ok(map)
}

fn load_locations(map: &mut RoadMap, path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    for (index, line) in contents.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let &[name, latitude, longitude] = &fields[..] else {
            return Err(malformed(
                path,
                index,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        };

        let latitude = parse_coordinate(path, index, "latitude", latitude)?;
        let longitude = parse_coordinate(path, index, "longitude", longitude)?;

        map.add_location(
            name,
            Some(Coordinates {
                latitude,
                longitude,
            }),
        );
    }
    Ok(())
}

fn load_segments(map: &mut RoadMap, path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    for (index, line) in contents.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let &[from, to, length, speed_limit, road_class] = &fields[..] else {
            return Err(malformed(
                path,
                index,
                format!("expected 5 fields, found {}", fields.len()),
            ));
        };

        let length = parse_positive(path, index, "length", length)?;
        let speed_limit = parse_positive(path, index, "speed limit", speed_limit)?;

        map.add_segment(from, to, length, speed_limit, road_class);
    }
    Ok(())
}

fn parse_coordinate(path: &Path, index: usize, field: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| malformed(path, index, format!("invalid {field} '{value}'")))?;
    if !parsed.is_finite() {
        return Err(malformed(
            path,
            index,
            format!("{field} must be finite, got {value}"),
        ));
    }
    Ok(parsed)
}

fn parse_positive(path: &Path, index: usize, field: &str, value: &str) -> Result<f64> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| malformed(path, index, format!("invalid {field} '{value}'")))?;
    if parsed <= 0 {
        return Err(malformed(
            path,
            index,
            format!("{field} must be positive, got {parsed}"),
        ));
    }
    Ok(parsed as f64)
}

fn malformed(path: &Path, index: usize, message: String) -> Error {
    Error::MalformedRecord {
        path: path.to_path_buf(),
        line: index + 1,
        message,
    }
}
