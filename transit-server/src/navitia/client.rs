//! Navitia HTTP client.
//!
//! One generic request executor plus a thin method per endpoint. Every
//! method here propagates failures; deciding which failures a caller may
//! see is the adapter's job.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::RAIL_LINE_CODES;

use super::error::NavitiaError;
use super::types::{
    JourneysResponse, LinesResponse, PlacesNearbyResponse, PlacesResponse, StopPointsResponse,
};

/// Default service root (Île-de-France Mobilités PRIM marketplace).
pub const DEFAULT_BASE_URL: &str = "https://prim.iledefrance-mobilites.fr/marketplace/v2/navitia";

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "apikey";

/// Upper bound on lines and stop-points requested per call.
pub const LIST_COUNT: u32 = 500;

/// Number of nearby places requested.
pub const NEARBY_COUNT: u32 = 10;

/// Search radius for nearby places, in metres.
pub const NEARBY_DISTANCE_M: u32 = 1000;

/// Longest body excerpt kept in decode errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Filter selecting every metro line.
pub const METRO_FILTER: &str = r#"commercial_mode.id="commercial_mode:Metro""#;

/// Filter selecting the regional-rail lines by code.
pub fn rail_filter() -> String {
    RAIL_LINE_CODES
        .iter()
        .map(|c| format!(r#"line.code="{c}""#))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Configuration for the Navitia client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavitiaConfig {
    /// Static API key sent with every request
    pub api_key: String,
    /// Service root, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves the transport default
    pub timeout_secs: Option<u64>,
}

impl NavitiaConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Navitia API client.
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// per-request state, so concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct NavitiaClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NavitiaClient {
    /// Create a new Navitia client with the given configuration.
    pub fn new(config: NavitiaConfig) -> Result<Self, NavitiaError> {
        let mut headers = HeaderMap::new();
        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| NavitiaError::InvalidApiKey)?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| NavitiaError::InvalidBaseUrl {
                url: config.base_url.clone(),
            })?;

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    /// Issue one GET against `base_url` extended by `segments` and decode
    /// the JSON body. Each segment is percent-encoded on its own, so a `/`
    /// or `?` inside an id stays part of that segment.
    ///
    /// Fails with `Http` on a non-success status, `Upstream` when the body
    /// is an `{"error": ...}` envelope (even with a 200), `Decode` when the
    /// body is not JSON of the expected shape, and `Transport` when the
    /// request never completed. Failures are logged here before they
    /// propagate.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, NavitiaError> {
        let url = self.endpoint(segments);
        let result = self.execute(&url, params).await;
        if let Err(e) = &result {
            warn!(path = url.path(), error = %e, "Navitia request failed");
        }
        result
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejected cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        url: &Url,
        params: &[(&str, String)],
    ) -> Result<T, NavitiaError> {
        debug!(%url, "Navitia request");

        let response = self.http.get(url.clone()).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavitiaError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        parse_body(&body)
    }

    /// `GET /places?q=`
    pub async fn places(&self, query: &str) -> Result<PlacesResponse, NavitiaError> {
        self.fetch(&["places"], &[("q", query.to_string())]).await
    }

    /// `GET /journeys?from=&to=`
    pub async fn journeys(&self, from: &str, to: &str) -> Result<JourneysResponse, NavitiaError> {
        self.fetch(
            &["journeys"],
            &[("from", from.to_string()), ("to", to.to_string())],
        )
        .await
    }

    /// `GET /lines?count=&filter=`
    pub async fn lines(&self, filter: &str) -> Result<LinesResponse, NavitiaError> {
        self.fetch(
            &["lines"],
            &[
                ("count", LIST_COUNT.to_string()),
                ("filter", filter.to_string()),
            ],
        )
        .await
    }

    /// `GET /lines/{line_id}/stop_points?count=`
    pub async fn line_stop_points(
        &self,
        line_id: &str,
    ) -> Result<StopPointsResponse, NavitiaError> {
        self.fetch(
            &["lines", line_id, "stop_points"],
            &[("count", LIST_COUNT.to_string())],
        )
        .await
    }

    /// `GET /coord/{lon};{lat}/places_nearby`
    ///
    /// Navitia wants longitude first. Swapping the two silently returns
    /// places on the other side of the world.
    pub async fn places_nearby(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<PlacesNearbyResponse, NavitiaError> {
        self.fetch(
            &["coord", &coord_segment(lat, lon), "places_nearby"],
            &[
                ("count", NEARBY_COUNT.to_string()),
                ("distance", NEARBY_DISTANCE_M.to_string()),
                ("type[]", "stop_area".to_string()),
            ],
        )
        .await
    }
}

fn coord_segment(lat: f64, lon: f64) -> String {
    format!("{lon};{lat}")
}

/// Decode a response body, turning an error envelope into `Upstream`.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, NavitiaError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| decode_error(&e, body))?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let message = error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("Unknown API Error")
            .to_string();
        return Err(NavitiaError::Upstream { message });
    }

    serde_json::from_value(value).map_err(|e| decode_error(&e, body))
}

fn decode_error(e: &serde_json::Error, body: &str) -> NavitiaError {
    NavitiaError::Decode {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
    }
}
