//! Data types used by the grouping pipeline.

use anyhow::{Context, Result, bail};
use geojson::Feature;
use serde::Serialize;
use serde_json::Value;

use crate::grouper::utility::parse_quantity;

pub const FACILITY_NAME: &str = "FACILITY NAME";
pub const GHG_QUANTITY: &str = "GHG QUANTITY (METRIC TONS CO2e)";

/// One input feature with its grouping-relevant fields extracted.
///
/// Descriptive fields are held verbatim as JSON values so the first record
/// of a group can supply them to the output unchanged.
#[derive(Debug)]
pub struct FacilityRecord {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    /// Parsed emissions quantity; `None` when missing or malformed.
    pub quantity: Option<f64>,
    pub state: Value,
    pub city: Value,
    pub year: Value,
    pub address: Value,
    pub parent: Value,
}

impl FacilityRecord {
    /// Extracts a record from a GeoJSON feature.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature has no Point geometry, no properties,
    /// or no string `FACILITY NAME` — without a name the grouping key cannot
    /// be computed. A missing or malformed emissions quantity is not an
    /// error; it parses to `None`.
    pub fn from_feature(feature: &Feature) -> Result<Self> {
        let geometry = feature
            .geometry
            .as_ref()
            .context("feature has no geometry")?;
        let (lon, lat) = match &geometry.value {
            geojson::Value::Point(coords) if coords.len() >= 2 => (coords[0], coords[1]),
            _ => bail!("feature geometry is not a Point"),
        };

        let properties = feature
            .properties
            .as_ref()
            .context("feature has no properties")?;

        let name = match properties.get(FACILITY_NAME) {
            Some(Value::String(name)) => name.clone(),
            Some(_) => bail!("property {:?} is not a string", FACILITY_NAME),
            None => bail!("property {:?} is missing", FACILITY_NAME),
        };

        let quantity = parse_quantity(properties.get(GHG_QUANTITY));

        let copied = |key: &str| properties.get(key).cloned().unwrap_or(Value::Null);

        Ok(FacilityRecord {
            name,
            lon,
            lat,
            quantity,
            state: copied("STATE"),
            city: copied("CITY NAME"),
            year: copied("REPORTING YEAR"),
            address: copied("REPORTED ADDRESS"),
            parent: copied("PARENT COMPANIES"),
        })
    }
}

/// Output properties for one grouped facility. Serialized field order is the
/// order written to the output file.
#[derive(Debug, Serialize)]
pub struct FacilitySummary {
    pub facility: String,
    pub emissions: i64,
    pub count: usize,
    pub state: Value,
    pub city: Value,
    pub year: Value,
    pub address: Value,
    pub parent: Value,
}
