//! Facility grouping and emissions aggregation.
//!
//! This module extracts per-facility records from input GeoJSON features,
//! merges records that share a normalized facility name, and reduces each
//! group to a single summary feature with summed emissions and averaged
//! coordinates.

pub mod aggregate;
pub mod types;
pub mod utility;
