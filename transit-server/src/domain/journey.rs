//! Itineraries and their legs.

use chrono::NaiveDateTime;

use super::Station;

/// Kind of leg within an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    /// A ride on a transit line.
    PublicTransport,
    /// Walking (or other street movement) between two points.
    StreetNetwork,
    /// Standing still at a stop.
    Waiting,
    /// Moving between platforms or stops during a change.
    Transfer,
    /// Any section type Navitia sends beyond the four above.
    Other,
}

impl SectionType {
    /// Map an upstream section `type` string.
    pub fn parse(s: &str) -> Self {
        match s {
            "public_transport" => SectionType::PublicTransport,
            "street_network" => SectionType::StreetNetwork,
            "waiting" => SectionType::Waiting,
            "transfer" => SectionType::Transfer,
            _ => SectionType::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::PublicTransport => "public_transport",
            SectionType::StreetNetwork => "street_network",
            SectionType::Waiting => "waiting",
            SectionType::Transfer => "transfer",
            SectionType::Other => "other",
        }
    }
}

/// One uninterrupted leg of a journey.
///
/// Transit details (`mode`, `line_code`, `line_color`) are only present on
/// legs that carry display information, which in practice means
/// `PublicTransport` sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub section_type: SectionType,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    /// Seconds.
    pub duration: u64,
    pub mode: Option<String>,
    pub line_code: Option<String>,
    pub line_color: Option<String>,
    pub from_name: String,
    pub to_name: String,
    /// Stations served along the leg, in travel order.
    pub stops: Vec<Station>,
}

/// A complete itinerary. Sections are in upstream (chronological) order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteModel {
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    /// Seconds.
    pub duration: u64,
    pub sections: Vec<Section>,
}

impl RouteModel {
    /// Number of changes, counted as transit legs after the first.
    pub fn transfers(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.section_type == SectionType::PublicTransport)
            .count()
            .saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn section(section_type: SectionType) -> Section {
        Section {
            section_type,
            departure_time: at(10, 0),
            arrival_time: at(10, 5),
            duration: 300,
            mode: None,
            line_code: None,
            line_color: None,
            from_name: String::new(),
            to_name: String::new(),
            stops: Vec::new(),
        }
    }

    #[test]
    fn parse_known_types() {
        assert_eq!(SectionType::parse("public_transport"), SectionType::PublicTransport);
        assert_eq!(SectionType::parse("street_network"), SectionType::StreetNetwork);
        assert_eq!(SectionType::parse("waiting"), SectionType::Waiting);
        assert_eq!(SectionType::parse("transfer"), SectionType::Transfer);
    }

    #[test]
    fn parse_unknown_type() {
        assert_eq!(SectionType::parse("crow_fly"), SectionType::Other);
        assert_eq!(SectionType::parse(""), SectionType::Other);
    }

    #[test]
    fn as_str_matches_parse() {
        for t in [
            SectionType::PublicTransport,
            SectionType::StreetNetwork,
            SectionType::Waiting,
            SectionType::Transfer,
        ] {
            assert_eq!(SectionType::parse(t.as_str()), t);
        }
    }

    #[test]
    fn transfers_counts_changes() {
        let route = RouteModel {
            departure_time: at(10, 0),
            arrival_time: at(10, 40),
            duration: 2400,
            sections: vec![
                section(SectionType::StreetNetwork),
                section(SectionType::PublicTransport),
                section(SectionType::Transfer),
                section(SectionType::Waiting),
                section(SectionType::PublicTransport),
                section(SectionType::StreetNetwork),
            ],
        };
        assert_eq!(route.transfers(), 1);
    }

    #[test]
    fn walking_only_route_has_no_transfers() {
        let route = RouteModel {
            departure_time: at(10, 0),
            arrival_time: at(10, 5),
            duration: 300,
            sections: vec![section(SectionType::StreetNetwork)],
        };
        assert_eq!(route.transfers(), 0);
    }
}
