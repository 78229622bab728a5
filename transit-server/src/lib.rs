//! Paris-region trip planning backend.
//!
//! A thin adapter over the Navitia journey-planning API: it searches
//! stations, plans journeys, lists metro and RER lines, and normalises
//! the upstream JSON into a small, stable domain model.

pub mod adapter;
pub mod config;
pub mod domain;
pub mod navitia;
pub mod web;
