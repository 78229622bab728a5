//! Navitia API response DTOs.
//!
//! These types map directly to the Navitia JSON responses, reduced to the
//! fields the adapter reads. Navitia omits fields freely, so nearly
//! everything is an `Option`, strings included: Navitia sends explicit
//! `null` as readily as it drops a key, and either becomes a default during
//! conversion rather than a decode failure.

use serde::Deserialize;

/// Response from `GET /places`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesResponse {
    pub places: Option<Vec<Place>>,
}

/// An autocomplete candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub id: Option<String>,

    pub name: Option<String>,

    /// `stop_area`, `stop_point`, `address`, `poi`, `administrative_region`.
    pub embedded_type: Option<String>,
}

impl Place {
    /// Whether this place is a whole station.
    pub fn is_stop_area(&self) -> bool {
        self.embedded_type.as_deref() == Some("stop_area")
    }
}

/// Response from `GET /journeys`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JourneysResponse {
    pub journeys: Option<Vec<Journey>>,
}

/// One itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct Journey {
    /// Local time, `YYYYMMDDTHHMMSS`.
    pub departure_date_time: Option<String>,

    /// Local time, `YYYYMMDDTHHMMSS`.
    pub arrival_date_time: Option<String>,

    /// Seconds.
    pub duration: Option<i64>,

    pub sections: Option<Vec<JourneySection>>,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneySection {
    /// `public_transport`, `street_network`, `waiting`, `transfer`, ...
    #[serde(rename = "type")]
    pub section_type: Option<String>,

    pub departure_date_time: Option<String>,

    pub arrival_date_time: Option<String>,

    pub duration: Option<i64>,

    /// Only present on transit legs.
    pub display_informations: Option<DisplayInformations>,

    pub from: Option<SectionEndpoint>,

    pub to: Option<SectionEndpoint>,

    /// Calls along a transit leg.
    pub stop_date_times: Option<Vec<StopDateTime>>,
}

/// Display block of a transit leg.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayInformations {
    pub physical_mode: Option<String>,
    pub code: Option<String>,
    /// Hex colour without `#`.
    pub color: Option<String>,
}

/// Start or end point of a leg. Navitia embeds a full place here; only
/// the name is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionEndpoint {
    pub name: Option<String>,
}

/// A call at a stop-point during a transit leg.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDateTime {
    pub stop_point: Option<StopPoint>,
}

/// Response from `GET /lines`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinesResponse {
    pub lines: Option<Vec<NavitiaLine>>,
}

/// A line as Navitia describes it.
#[derive(Debug, Clone, Deserialize)]
pub struct NavitiaLine {
    pub id: Option<String>,

    pub code: Option<String>,

    pub name: Option<String>,

    /// Hex colour without `#`.
    pub color: Option<String>,

    pub commercial_mode: Option<CommercialMode>,
}

/// Commercial mode tag, e.g. `{"id": "commercial_mode:Metro", "name": "Metro"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommercialMode {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Response from `GET /lines/{id}/stop_points`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopPointsResponse {
    pub stop_points: Option<Vec<StopPoint>>,
}

/// A platform or access point, optionally with its parent station.
#[derive(Debug, Clone, Deserialize)]
pub struct StopPoint {
    pub id: Option<String>,

    pub name: Option<String>,

    pub stop_area: Option<StopAreaRef>,
}

/// A whole station, as embedded in other objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopAreaRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Response from `GET /coord/{lon};{lat}/places_nearby`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesNearbyResponse {
    pub places_nearby: Option<Vec<PlaceNearby>>,
}

/// A place near a coordinate. With `type[]=stop_area` the station details
/// sit in the nested `stop_area` object.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceNearby {
    pub id: Option<String>,

    pub stop_area: Option<StopAreaRef>,
}
