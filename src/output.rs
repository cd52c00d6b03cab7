//! Output formatting and persistence for grouped collections.

use anyhow::Result;
use geojson::FeatureCollection;
use std::fs;
use tracing::debug;

/// Writes a [`FeatureCollection`] to `path` as pretty-printed (2-space
/// indented) GeoJSON.
///
/// The document is serialized in memory first, so a serialization failure
/// leaves no partial file behind. An unwritable path is a fatal error.
pub fn write_collection(path: &str, collection: &FeatureCollection) -> Result<()> {
    let json = serde_json::to_string_pretty(collection)?;
    debug!(path, bytes = json.len(), "Writing grouped collection");

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn empty_collection() -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        }
    }

    #[test]
    fn test_write_collection_creates_file() {
        let path = temp_path("ghg_grouper_test_create.geojson");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_collection(&path, &empty_collection()).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"FeatureCollection\""));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_collection_is_deterministic() {
        let first = temp_path("ghg_grouper_test_det_a.geojson");
        let second = temp_path("ghg_grouper_test_det_b.geojson");

        write_collection(&first, &empty_collection()).unwrap();
        write_collection(&second, &empty_collection()).unwrap();

        let a = fs::read_to_string(&first).unwrap();
        let b = fs::read_to_string(&second).unwrap();
        assert_eq!(a, b);

        fs::remove_file(&first).unwrap();
        fs::remove_file(&second).unwrap();
    }

    #[test]
    fn test_write_collection_unwritable_path_is_error() {
        let result = write_collection("/nonexistent_dir/out.geojson", &empty_collection());
        assert!(result.is_err());
    }
}
