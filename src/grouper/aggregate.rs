use anyhow::{Result, bail};
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::grouper::types::{FacilityRecord, FacilitySummary};
use crate::grouper::utility::{mean, normalize_name, title_case};

/// Groups features by normalized facility name and reduces each group to a
/// single summary feature.
///
/// Output order is the order in which each key was first seen, and insertion
/// order is kept within a group, so the first record of a group supplies the
/// descriptive output fields.
///
/// # Errors
///
/// Returns an error if any input feature lacks the fields needed to compute
/// its grouping key (see [`FacilityRecord::from_feature`]). Unparseable
/// emission quantities are not errors; they contribute zero.
pub fn group_by_facility(collection: &FeatureCollection) -> Result<FeatureCollection> {
    let mut key_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<FacilityRecord>> = HashMap::new();

    for feature in &collection.features {
        let record = FacilityRecord::from_feature(feature)?;
        let key = normalize_name(&record.name);

        if record.quantity.is_none() {
            debug!(facility = %key, "Emissions quantity missing or malformed, counted as zero");
        }

        if !groups.contains_key(&key) {
            key_order.push(key.clone());
        }
        groups.entry(key).or_default().push(record);
    }

    let features = key_order
        .iter()
        .map(|key| summarize_group(key, &groups[key]))
        .collect::<Result<Vec<_>>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Reduces one group into its output feature: summed emissions rounded to
/// the nearest integer, unweighted mean coordinates, and descriptive fields
/// copied from the first record.
fn summarize_group(key: &str, records: &[FacilityRecord]) -> Result<Feature> {
    let total_emissions: f64 = records.iter().filter_map(|r| r.quantity).sum();
    let lons: Vec<f64> = records.iter().map(|r| r.lon).collect();
    let lats: Vec<f64> = records.iter().map(|r| r.lat).collect();
    let base = &records[0];

    let summary = FacilitySummary {
        facility: title_case(key),
        emissions: total_emissions.round() as i64,
        count: records.len(),
        state: base.state.clone(),
        city: base.city.clone(),
        year: base.year.clone(),
        address: base.address.clone(),
        parent: base.parent.clone(),
    };

    let Value::Object(properties) = serde_json::to_value(&summary)? else {
        bail!("facility summary did not serialize to a JSON object");
    };

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::Point(vec![
            mean(&lons),
            mean(&lats),
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
