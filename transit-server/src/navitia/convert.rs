//! Conversion from Navitia DTOs to domain types.
//!
//! Everything here is pure: missing fields become defaults, duplicates are
//! removed, and the line catalog is classified and sorted. Nothing in this
//! module can fail.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    DEFAULT_LINE_COLOR, DEFAULT_MODE_LABEL, Line, LineCategory, RouteModel, Section, SectionType,
    Station, decode_navitia_datetime, dedup_stations, sort_lines,
};

use super::types::{
    JourneySection, JourneysResponse, LinesResponse, NavitiaLine, PlacesNearbyResponse,
    PlacesResponse, StopPoint, StopPointsResponse,
};

/// Autocomplete results: stop-areas only.
pub fn convert_places(response: PlacesResponse) -> Vec<Station> {
    let stations = response
        .places
        .unwrap_or_default()
        .into_iter()
        .filter(|p| p.is_stop_area())
        .map(|p| Station::new(p.id.unwrap_or_default(), p.name.unwrap_or_default()));

    dedup_stations(stations)
}

/// Itineraries, in upstream order.
pub fn convert_journeys(response: JourneysResponse) -> Vec<RouteModel> {
    response
        .journeys
        .unwrap_or_default()
        .into_iter()
        .map(|j| RouteModel {
            departure_time: decode_navitia_datetime(j.departure_date_time.as_deref()),
            arrival_time: decode_navitia_datetime(j.arrival_date_time.as_deref()),
            duration: duration_secs(j.duration),
            sections: j
                .sections
                .unwrap_or_default()
                .into_iter()
                .map(convert_section)
                .collect(),
        })
        .collect()
}

fn convert_section(section: JourneySection) -> Section {
    let info = section.display_informations.unwrap_or_default();

    let stops = section
        .stop_date_times
        .unwrap_or_default()
        .into_iter()
        .filter_map(|sdt| sdt.stop_point)
        .filter_map(fold_stop_point);

    Section {
        section_type: SectionType::parse(section.section_type.as_deref().unwrap_or_default()),
        departure_time: decode_navitia_datetime(section.departure_date_time.as_deref()),
        arrival_time: decode_navitia_datetime(section.arrival_date_time.as_deref()),
        duration: duration_secs(section.duration),
        mode: info.physical_mode,
        line_code: info.code,
        line_color: info.color,
        from_name: section.from.and_then(|p| p.name).unwrap_or_default(),
        to_name: section.to.and_then(|p| p.name).unwrap_or_default(),
        stops: dedup_stations(stops),
    }
}

/// Build the line catalog from the metro and regional-rail responses.
///
/// Lines are merged by id (the later entry's data wins), classified,
/// stripped of anything that is neither metro nor RER, and sorted.
pub fn convert_line_catalog(metro: LinesResponse, rail: LinesResponse) -> Vec<Line> {
    let raw = merge_lines(
        metro
            .lines
            .unwrap_or_default()
            .into_iter()
            .chain(rail.lines.unwrap_or_default()),
    );
    let merged = raw.len();

    let mut lines: Vec<Line> = raw
        .into_iter()
        .map(convert_line)
        .filter(|l| l.category.is_listed())
        .collect();
    sort_lines(&mut lines);

    debug!(merged, listed = lines.len(), "built line catalog");
    lines
}

/// Deduplicate by id. An entry keeps the position where its id was first
/// seen, but the data of the last entry with that id.
fn merge_lines(lines: impl IntoIterator<Item = NavitiaLine>) -> Vec<NavitiaLine> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<NavitiaLine> = Vec::new();

    for line in lines {
        let id = line.id.clone().unwrap_or_default();
        match positions.get(&id) {
            Some(&idx) => merged[idx] = line,
            None => {
                positions.insert(id, merged.len());
                merged.push(line);
            }
        }
    }

    merged
}

fn convert_line(line: NavitiaLine) -> Line {
    let code = line.code.unwrap_or_default();
    let mode = line.commercial_mode.unwrap_or_default();
    let mode_id = mode.id.unwrap_or_default();
    let mode_name = mode.name.unwrap_or_default();
    let category = LineCategory::classify(&code, &mode_id, &mode_name);

    Line {
        id: line.id.unwrap_or_default(),
        code,
        color: non_empty(line.color).unwrap_or_else(|| DEFAULT_LINE_COLOR.to_string()),
        name: line.name.unwrap_or_default(),
        mode: non_empty(Some(mode_name)).unwrap_or_else(|| DEFAULT_MODE_LABEL.to_string()),
        category,
    }
}

/// Stations served by a line: folded to stop-areas, first name seen wins,
/// sorted by name.
pub fn convert_stop_points(response: StopPointsResponse) -> Vec<Station> {
    let stations = response
        .stop_points
        .unwrap_or_default()
        .into_iter()
        .filter_map(fold_stop_point);

    let mut stations = dedup_stations(stations);
    stations.sort_by(|a, b| a.name.cmp(&b.name));
    stations
}

/// Stations near a coordinate, in upstream (distance) order. Entries
/// without a stop-area id are dropped.
pub fn convert_places_nearby(response: PlacesNearbyResponse) -> Vec<Station> {
    let stations = response
        .places_nearby
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| {
            let area = p.stop_area.unwrap_or_default();
            let Some(id) = non_empty(area.id) else {
                let place = p.id.as_deref().unwrap_or_default();
                debug!(place, "skipping nearby place without stop_area id");
                return None;
            };
            Some(Station::new(id, area.name.unwrap_or_default()))
        });

    dedup_stations(stations)
}

/// Resolve a stop-point to its station. The parent stop-area's id and name
/// are preferred field by field, the stop-point's own fill any gap. `None`
/// when no id remains at all.
fn fold_stop_point(sp: StopPoint) -> Option<Station> {
    let area = sp.stop_area.unwrap_or_default();
    let id = non_empty(area.id).or_else(|| non_empty(sp.id))?;
    let name = non_empty(area.name).or(sp.name).unwrap_or_default();

    Some(Station::new(id, name))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

fn duration_secs(d: Option<i64>) -> u64 {
    d.and_then(|d| u64::try_from(d).ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn places(json: &str) -> PlacesResponse {
        serde_json::from_str(json).unwrap()
    }

    fn lines(json: &str) -> LinesResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn places_keep_only_stop_areas() {
        let resp = places(
            r#"{"places": [
                {"id": "stop_area:IDFM:71517", "name": "Opéra", "embedded_type": "stop_area"},
                {"id": "2.33;48.87", "name": "1 Rue de l'Opéra", "embedded_type": "address"},
                {"id": "stop_point:IDFM:22090", "name": "Opéra", "embedded_type": "stop_point"},
                {"id": "poi:1", "name": "Opéra Garnier", "embedded_type": "poi"}
            ]}"#,
        );

        assert_eq!(
            convert_places(resp),
            vec![Station::new("stop_area:IDFM:71517", "Opéra")]
        );
    }

    #[test]
    fn places_tolerate_null_fields() {
        let resp = places(
            r#"{"places": [
                {"id": "poi:1", "name": null, "embedded_type": "poi"},
                {"id": "stop_area:IDFM:71517", "name": null, "embedded_type": "stop_area"},
                {"id": "stop_area:IDFM:73626", "name": "Nation", "embedded_type": "stop_area"}
            ]}"#,
        );

        assert_eq!(
            convert_places(resp),
            vec![
                Station::new("stop_area:IDFM:71517", ""),
                Station::new("stop_area:IDFM:73626", "Nation"),
            ]
        );
    }

    #[test]
    fn places_missing_list_is_empty() {
        assert!(convert_places(places("{}")).is_empty());
    }

    #[test]
    fn journeys_map_sections() {
        let resp: JourneysResponse = serde_json::from_str(
            r#"{"journeys": [{
                "departure_date_time": "20240115T142500",
                "arrival_date_time": "20240115T150000",
                "duration": 2100,
                "sections": [
                    {
                        "type": "street_network",
                        "departure_date_time": "20240115T142500",
                        "arrival_date_time": "20240115T143000",
                        "duration": 300,
                        "from": {"name": "10 Rue de Rivoli"},
                        "to": {"name": "Saint-Paul"}
                    },
                    {
                        "type": "public_transport",
                        "departure_date_time": "20240115T143000",
                        "arrival_date_time": "20240115T145500",
                        "duration": 1500,
                        "display_informations": {"physical_mode": "Métro", "code": "1", "color": "FFCD00"},
                        "from": {"name": "Saint-Paul"},
                        "to": {"name": "Charles de Gaulle - Étoile"},
                        "stop_date_times": [
                            {"stop_point": {"id": "stop_point:1", "name": "Saint-Paul (quai)",
                                            "stop_area": {"id": "stop_area:1", "name": "Saint-Paul"}}},
                            {"stop_point": {"id": "stop_point:2", "name": "Hôtel de Ville",
                                            "stop_area": {"id": "stop_area:2", "name": "Hôtel de Ville"}}},
                            {"stop_point": {"id": "stop_point:3", "name": "Étoile"}}
                        ]
                    },
                    {"type": "crow_fly", "duration": 0}
                ]
            }]}"#,
        )
        .unwrap();

        let routes = convert_journeys(resp);
        assert_eq!(routes.len(), 1);

        let route = &routes[0];
        assert_eq!(route.duration, 2100);
        assert_eq!(route.departure_time.hour(), 14);
        assert_eq!(route.departure_time.minute(), 25);
        assert_eq!(route.sections.len(), 3);

        let walk = &route.sections[0];
        assert_eq!(walk.section_type, SectionType::StreetNetwork);
        assert_eq!(walk.mode, None);
        assert_eq!(walk.line_code, None);
        assert_eq!(walk.from_name, "10 Rue de Rivoli");
        assert!(walk.stops.is_empty());

        let ride = &route.sections[1];
        assert_eq!(ride.section_type, SectionType::PublicTransport);
        assert_eq!(ride.mode.as_deref(), Some("Métro"));
        assert_eq!(ride.line_code.as_deref(), Some("1"));
        assert_eq!(ride.line_color.as_deref(), Some("FFCD00"));
        assert_eq!(ride.duration, 1500);
        assert_eq!(
            ride.stops,
            vec![
                Station::new("stop_area:1", "Saint-Paul"),
                Station::new("stop_area:2", "Hôtel de Ville"),
                Station::new("stop_point:3", "Étoile"),
            ]
        );

        let other = &route.sections[2];
        assert_eq!(other.section_type, SectionType::Other);
        assert_eq!(other.from_name, "");
        assert_eq!(other.to_name, "");
    }

    #[test]
    fn negative_or_missing_duration_is_zero() {
        assert_eq!(duration_secs(Some(-5)), 0);
        assert_eq!(duration_secs(None), 0);
        assert_eq!(duration_secs(Some(42)), 42);
    }

    #[test]
    fn journey_bad_dates_fall_back_without_failing() {
        let resp: JourneysResponse = serde_json::from_str(
            r#"{"journeys": [{"departure_date_time": "oops", "duration": 60}]}"#,
        )
        .unwrap();
        let routes = convert_journeys(resp);
        assert_eq!(routes.len(), 1);
        assert!(routes[0].sections.is_empty());
        // Fallback is "now"; just check it is a plausible date.
        assert!(routes[0].departure_time.year() >= 2024);
    }

    #[test]
    fn catalog_classifies_filters_and_sorts() {
        let metro = lines(
            r#"{"lines": [
                {"id": "line:M10", "code": "10", "name": "Boulogne - Austerlitz", "color": "C9910D",
                 "commercial_mode": {"id": "commercial_mode:Metro", "name": "Metro"}},
                {"id": "line:M2", "code": "2", "commercial_mode": {"id": "commercial_mode:Metro", "name": "Metro"}},
                {"id": "line:M1", "code": "1", "commercial_mode": {"id": "commercial_mode:Metro", "name": "Metro"}}
            ]}"#,
        );
        let rail = lines(
            r#"{"lines": [
                {"id": "line:RC", "code": "C", "commercial_mode": {"id": "commercial_mode:RER", "name": "RER"}},
                {"id": "line:RA", "code": "A"},
                {"id": "line:T3", "code": "T3", "commercial_mode": {"id": "commercial_mode:Tramway", "name": "Tramway"}},
                {"id": "line:H", "code": "H", "commercial_mode": {"id": "commercial_mode:Train", "name": "Transilien"}}
            ]}"#,
        );

        let catalog = convert_line_catalog(metro, rail);
        let codes: Vec<_> = catalog.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["1", "2", "10", "A", "C"]);

        let m10 = &catalog[2];
        assert_eq!(m10.category, LineCategory::Metro);
        assert_eq!(m10.color, "C9910D");
        assert_eq!(m10.mode, "Metro");
        assert_eq!(m10.name, "Boulogne - Austerlitz");

        let ra = &catalog[3];
        assert_eq!(ra.category, LineCategory::Rer);
        assert_eq!(ra.color, DEFAULT_LINE_COLOR);
        assert_eq!(ra.mode, DEFAULT_MODE_LABEL);
        assert_eq!(ra.name, "");
    }

    #[test]
    fn catalog_dedups_by_id() {
        let metro = lines(
            r#"{"lines": [{"id": "line:M1", "code": "1", "commercial_mode": {"name": "Metro"}}]}"#,
        );
        let rail = lines(
            r#"{"lines": [{"id": "line:M1", "code": "1", "color": "FFCD00", "commercial_mode": {"name": "Metro"}}]}"#,
        );

        let catalog = convert_line_catalog(metro, rail);
        assert_eq!(catalog.len(), 1);
        // Last write wins.
        assert_eq!(catalog[0].color, "FFCD00");
    }

    #[test]
    fn merge_keeps_first_position_and_last_data() {
        let raw: LinesResponse = lines(
            r#"{"lines": [
                {"id": "a", "code": "old"},
                {"id": "b", "code": "b"},
                {"id": "a", "code": "new"}
            ]}"#,
        );
        let merged = merge_lines(raw.lines.unwrap());
        let view: Vec<_> = merged
            .iter()
            .map(|l| (l.id.as_deref().unwrap(), l.code.as_deref().unwrap()))
            .collect();
        assert_eq!(view, [("a", "new"), ("b", "b")]);
    }

    #[test]
    fn catalog_empty_when_nothing_listed() {
        let metro = lines("{}");
        let rail = lines(r#"{"lines": [{"id": "line:T3", "code": "T3"}]}"#);
        assert!(convert_line_catalog(metro, rail).is_empty());
    }

    #[test]
    fn stop_points_fold_dedup_and_sort() {
        let resp: StopPointsResponse = serde_json::from_str(
            r#"{"stop_points": [
                {"id": "stop_point:N1", "name": "Nation quai 1",
                 "stop_area": {"id": "stop_area:N", "name": "Nation"}},
                {"id": "stop_point:B1", "name": "Bastille"},
                {"id": "stop_point:N2", "name": "Nation quai 2",
                 "stop_area": {"id": "stop_area:N", "name": "Nation (bis)"}},
                {"id": "stop_point:A1", "name": "Alma",
                 "stop_area": {"id": "stop_area:A", "name": ""}},
                {"id": "", "name": "nowhere"},
                {"id": null, "name": null, "stop_area": null},
                {"id": "stop_point:V1", "name": null,
                 "stop_area": {"id": null, "name": null}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            convert_stop_points(resp),
            vec![
                Station::new("stop_point:V1", ""),
                Station::new("stop_area:A", "Alma"),
                Station::new("stop_point:B1", "Bastille"),
                Station::new("stop_area:N", "Nation"),
            ]
        );
    }

    #[test]
    fn nearby_uses_nested_stop_area() {
        let resp: PlacesNearbyResponse = serde_json::from_str(
            r#"{"places_nearby": [
                {"id": "stop_area:1", "embedded_type": "stop_area", "distance": "120",
                 "stop_area": {"id": "stop_area:1", "name": "Châtelet"}},
                {"id": "poi:9", "embedded_type": "poi"},
                {"id": "stop_area:2", "stop_area": {"id": "stop_area:2", "name": "Les Halles"}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            convert_places_nearby(resp),
            vec![
                Station::new("stop_area:1", "Châtelet"),
                Station::new("stop_area:2", "Les Halles"),
            ]
        );
    }

    #[test]
    fn nearby_skips_stop_areas_without_id() {
        let resp: PlacesNearbyResponse = serde_json::from_str(
            r#"{"places_nearby": [
                {"id": "stop_area:0", "stop_area": {"name": "Anonymous"}},
                {"id": null, "stop_area": {"id": "", "name": "Blank"}},
                {"id": "stop_area:3", "stop_area": {"id": null, "name": null}},
                {"id": "stop_area:1", "stop_area": {"id": "stop_area:1", "name": null}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            convert_places_nearby(resp),
            vec![Station::new("stop_area:1", "")]
        );
    }

    #[test]
    fn nearby_missing_list_is_empty() {
        let resp: PlacesNearbyResponse = serde_json::from_str("{}").unwrap();
        assert!(convert_places_nearby(resp).is_empty());
    }
}
