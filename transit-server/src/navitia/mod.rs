//! Navitia journey-planning API client.
//!
//! This module provides an HTTP client for the Navitia API as exposed by
//! the Île-de-France Mobilités PRIM marketplace, together with the raw
//! response types and their conversion into domain types.
//!
//! Key characteristics of Navitia:
//! - Times are local wall-clock `YYYYMMDDTHHMMSS` strings with no offset
//! - Errors may arrive as an `{"error": {...}}` body with a 200 status
//! - Coordinates in paths are `lon;lat`, not `lat;lon`

mod client;
mod convert;
mod error;
mod types;

pub use client::{
    DEFAULT_BASE_URL, LIST_COUNT, METRO_FILTER, NEARBY_COUNT, NEARBY_DISTANCE_M, NavitiaClient,
    NavitiaConfig, rail_filter,
};
pub use convert::{
    convert_journeys, convert_line_catalog, convert_places, convert_places_nearby,
    convert_stop_points,
};
pub use error::NavitiaError;
pub use types::{
    JourneysResponse, LinesResponse, PlacesNearbyResponse, PlacesResponse, StopPointsResponse,
};
