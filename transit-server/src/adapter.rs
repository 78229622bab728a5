//! The five transit queries exposed to the presentation layer.
//!
//! Each query has its own failure policy, visible in its return type:
//!
//! | query                   | policy      | returns                      |
//! |-------------------------|-------------|------------------------------|
//! | `search_stations`       | fail-soft   | `Vec`, empty on any error    |
//! | `search_routes`         | fail-soft   | `Vec`, empty on any error    |
//! | `get_lines`             | fail-closed | `Vec`, empty unless both legs succeed |
//! | `get_stations_by_line`  | fail-soft   | `Vec`, empty on any error    |
//! | `get_nearby_stations`   | fail-loud   | `Result`, empty `Vec` means nothing nearby |
//!
//! Fail-soft queries back interactive fields where a blank list beats an
//! error banner, so "no data" and "request failed" look the same to the
//! caller. Errors are still logged before being dropped.

use tracing::{debug, warn};

use crate::domain::{Line, RouteModel, Station};
use crate::navitia::{
    METRO_FILTER, NavitiaClient, NavitiaError, convert_journeys, convert_line_catalog,
    convert_places, convert_places_nearby, convert_stop_points, rail_filter,
};

/// Queries shorter than this (in characters) never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Stateless adapter over the Navitia client.
///
/// Holds nothing but the client, so every query is independent and safe
/// to run concurrently with any other.
#[derive(Debug, Clone)]
pub struct TransitAdapter {
    client: NavitiaClient,
}

impl TransitAdapter {
    pub fn new(client: NavitiaClient) -> Self {
        Self { client }
    }

    /// Autocomplete stations by free text.
    pub async fn search_stations(&self, query: &str) -> Vec<Station> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let result = self.client.places(query).await.map(convert_places);
        or_empty(result, "station search")
    }

    /// Itineraries between two place ids.
    pub async fn search_routes(&self, from: &str, to: &str) -> Vec<RouteModel> {
        let result = self.client.journeys(from, to).await.map(convert_journeys);
        or_empty(result, "journey search")
    }

    /// Metro and RER lines, sorted for display.
    ///
    /// The metro and regional-rail requests run concurrently. If either
    /// fails the whole catalog is empty; a half-filled list is never
    /// returned.
    pub async fn get_lines(&self) -> Vec<Line> {
        let rail_filter = rail_filter();
        let result = tokio::try_join!(
            self.client.lines(METRO_FILTER),
            self.client.lines(&rail_filter),
        )
        .map(|(metro, rail)| convert_line_catalog(metro, rail));

        or_empty(result, "line catalog")
    }

    /// Stations served by a line, sorted by name.
    pub async fn get_stations_by_line(&self, line_id: &str) -> Vec<Station> {
        let result = self
            .client
            .line_stop_points(line_id)
            .await
            .map(convert_stop_points);
        or_empty(result, "stations by line")
    }

    /// Stations within walking distance of a coordinate.
    ///
    /// Unlike the other queries, failures are returned to the caller. An
    /// `Ok` with an empty list is a successful lookup that found nothing.
    pub async fn get_nearby_stations(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<Station>, NavitiaError> {
        let stations = convert_places_nearby(self.client.places_nearby(lat, lon).await?);
        debug!(lat, lon, found = stations.len(), "nearby lookup");
        Ok(stations)
    }
}

fn or_empty<T>(result: Result<Vec<T>, NavitiaError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "{what} failed, returning no results");
        Vec::new()
    })
}
