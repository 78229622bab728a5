//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Line, RouteModel, Section, Station};

/// Format used for all times in responses (local wall clock).
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn format_time(t: &NaiveDateTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Request to autocomplete station names.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Free-text query
    pub q: String,
}

/// Request for itineraries between two place ids.
#[derive(Debug, Deserialize)]
pub struct JourneySearchRequest {
    /// Origin place id
    pub from: String,

    /// Destination place id
    pub to: String,
}

/// Request for stations near a coordinate (decimal degrees).
#[derive(Debug, Deserialize)]
pub struct NearbyStationsRequest {
    pub lat: f64,
    pub lon: f64,
}

/// A station in results.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationResult {
    pub id: String,
    pub name: String,
}

impl From<&Station> for StationResult {
    fn from(s: &Station) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
        }
    }
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

impl StationsResponse {
    pub fn from_stations(stations: &[Station]) -> Self {
        Self {
            stations: stations.iter().map(StationResult::from).collect(),
        }
    }
}

/// A line in the catalog.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: String,
    pub code: String,

    /// Hex colour without `#`
    pub color: String,

    pub name: String,

    /// Mode display label
    pub mode: String,

    /// `METRO` or `RER`
    pub category: &'static str,
}

impl From<&Line> for LineResult {
    fn from(l: &Line) -> Self {
        Self {
            id: l.id.clone(),
            code: l.code.clone(),
            color: l.color.clone(),
            name: l.name.clone(),
            mode: l.mode.clone(),
            category: l.category.as_str(),
        }
    }
}

/// Response for the line catalog.
#[derive(Debug, Serialize)]
pub struct LineCatalogResponse {
    pub lines: Vec<LineResult>,
}

/// One leg of an itinerary.
#[derive(Debug, Serialize)]
pub struct SectionResult {
    #[serde(rename = "type")]
    pub section_type: &'static str,

    pub departure_time: String,
    pub arrival_time: String,
    pub duration_secs: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,

    pub from_name: String,
    pub to_name: String,
    pub stops: Vec<StationResult>,
}

impl From<&Section> for SectionResult {
    fn from(s: &Section) -> Self {
        Self {
            section_type: s.section_type.as_str(),
            departure_time: format_time(&s.departure_time),
            arrival_time: format_time(&s.arrival_time),
            duration_secs: s.duration,
            mode: s.mode.clone(),
            line_code: s.line_code.clone(),
            line_color: s.line_color.clone(),
            from_name: s.from_name.clone(),
            to_name: s.to_name.clone(),
            stops: s.stops.iter().map(StationResult::from).collect(),
        }
    }
}

/// An itinerary.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_secs: u64,

    /// Number of changes between transit legs
    pub transfers: usize,

    pub sections: Vec<SectionResult>,
}

impl From<&RouteModel> for RouteResult {
    fn from(r: &RouteModel) -> Self {
        Self {
            departure_time: format_time(&r.departure_time),
            arrival_time: format_time(&r.arrival_time),
            duration_secs: r.duration,
            transfers: r.transfers(),
            sections: r.sections.iter().map(SectionResult::from).collect(),
        }
    }
}

/// Response for journey search.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
