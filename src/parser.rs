//! GeoJSON parser for facility emission records.

use anyhow::{Result, bail};
use geojson::{FeatureCollection, GeoJson};

/// Parses raw UTF-8 text into a GeoJSON [`FeatureCollection`].
///
/// # Errors
///
/// Returns an error if the text is not valid GeoJSON or if the top-level
/// value is a bare `Feature` or `Geometry` rather than a `FeatureCollection`.
pub fn parse_collection(raw: &str) -> Result<FeatureCollection> {
    let geojson: GeoJson = raw.parse()?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) => bail!("expected a FeatureCollection, got a single Feature"),
        GeoJson::Geometry(_) => bail!("expected a FeatureCollection, got a bare Geometry"),
    }
}
