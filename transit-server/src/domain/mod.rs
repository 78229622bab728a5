//! Domain types for the transit adapter.
//!
//! These are the stable internal model handed to callers. They are plain
//! immutable values, built fresh from each upstream response; nothing in
//! here knows about HTTP or Navitia's JSON shapes.

mod journey;
mod line;
mod station;
mod time;

pub use journey::{RouteModel, Section, SectionType};
pub use line::{
    DEFAULT_LINE_COLOR, DEFAULT_MODE_LABEL, Line, LineCategory, RAIL_LINE_CODES, compare_lines,
    sort_lines,
};
pub use station::{Station, dedup_stations};
pub use time::decode_navitia_datetime;

#[cfg(test)]
pub(crate) use line::test_line;
