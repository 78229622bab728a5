//! Station type.

use std::collections::HashSet;
use std::fmt;

/// A named stop.
///
/// The id is the upstream place identifier (`stop_area:IDFM:71264` and
/// the like). Platform-level stop-points are folded up to their stop-area
/// before a `Station` is built, so two `Station`s with the same id always
/// refer to the same physical station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    pub id: String,
    pub name: String,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Drop stations whose id has already been seen. The first occurrence wins.
pub fn dedup_stations(stations: impl IntoIterator<Item = Station>) -> Vec<Station> {
    let mut seen = HashSet::new();
    stations
        .into_iter()
        .filter(|s| seen.insert(s.id.clone()))
        .collect()
}
