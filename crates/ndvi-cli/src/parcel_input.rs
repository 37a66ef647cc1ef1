//! Reading parcels from command-line input
//!
//! A parcel can be given as a GeoJSON file, an inline GeoJSON string or a
//! bounding box. FeatureCollections contribute their first feature.

use crate::errors::{self, CliError};
use geojson::GeoJson;
use ndvi_core::models::ParcelFeature;
use std::fs;
use std::path::Path;

/// Load a parcel from a file path or an inline GeoJSON string
pub fn load_parcel(input: &str) -> Result<ParcelFeature, CliError> {
    let trimmed = input.trim();
    let text = if trimmed.starts_with('{') {
        trimmed.to_string()
    } else {
        let path = Path::new(trimmed);
        if !path.exists() {
            return Err(errors::invalid_parcel(input, "file does not exist"));
        }
        fs::read_to_string(path).map_err(|e| errors::invalid_parcel(input, &e.to_string()))?
    };

    let geojson: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| errors::invalid_parcel(input, &e.to_string()))?;

    let value = match geojson {
        GeoJson::Geometry(geometry) => return Ok(ParcelFeature::from_geometry(geometry)),
        GeoJson::Feature(feature) => serde_json::to_value(feature),
        GeoJson::FeatureCollection(collection) => {
            let count = collection.features.len();
            let Some(first) = collection.features.into_iter().next() else {
                return Err(errors::invalid_parcel(input, "feature collection is empty"));
            };
            if count > 1 {
                tracing::warn!(count, "Feature collection has several features; using the first");
            }
            serde_json::to_value(first)
        }
    }
    .map_err(|e| errors::invalid_parcel(input, &e.to_string()))?;

    Ok(ParcelFeature::from_geojson(value))
}

/// Parse `min_lon,min_lat,max_lon,max_lat` into a rectangular parcel
pub fn parse_bbox(input: &str) -> Result<ParcelFeature, CliError> {
    let values: Vec<f64> = input
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| errors::invalid_parcel(input, "bounding box values must be numbers"))?;

    let &[min_lon, min_lat, max_lon, max_lat] = values.as_slice() else {
        return Err(errors::invalid_parcel(
            input,
            "expected four values: min_lon,min_lat,max_lon,max_lat",
        ));
    };

    if min_lon >= max_lon || min_lat >= max_lat {
        return Err(errors::invalid_parcel(input, "minimum must be below maximum"));
    }
    if !(-180.0..=180.0).contains(&min_lon)
        || !(-180.0..=180.0).contains(&max_lon)
        || !(-90.0..=90.0).contains(&min_lat)
        || !(-90.0..=90.0).contains(&max_lat)
    {
        return Err(errors::invalid_parcel(input, "coordinates out of range"));
    }

    Ok(ParcelFeature::rectangle(min_lon, min_lat, max_lon, max_lat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const POLYGON: &str = r#"{"type":"Polygon","coordinates":[[[30.0,-2.0],[30.1,-2.0],[30.1,-1.9],[30.0,-2.0]]]}"#;

    #[test]
    fn test_inline_geometry_is_wrapped() {
        let parcel = load_parcel(POLYGON).unwrap();
        assert_eq!(parcel.as_json()["type"], "Feature");
        assert_eq!(parcel.geometry_type(), Some("Polygon"));
        assert_eq!(parcel.vertex_count(), 4);
    }

    #[test]
    fn test_feature_collection_file_uses_first_feature() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type":"FeatureCollection","features":[
                {{"type":"Feature","properties":{{"name":"north"}},"geometry":{}}},
                {{"type":"Feature","properties":{{"name":"south"}},"geometry":{}}}
            ]}}"#,
            POLYGON, POLYGON
        )
        .unwrap();

        let parcel = load_parcel(file.path().to_str().unwrap()).unwrap();
        assert_eq!(parcel.as_json()["properties"]["name"], "north");
    }

    #[test]
    fn test_empty_collection_rejected() {
        let err = load_parcel(r#"{"type":"FeatureCollection","features":[]}"#).unwrap_err();
        assert_eq!(err.message, "Invalid parcel");
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(load_parcel("/nonexistent/parcel.geojson").is_err());
    }

    #[test]
    fn test_parse_bbox() {
        let parcel = parse_bbox("30.0,-2.0,30.1,-1.9").unwrap();
        assert_eq!(parcel.vertex_count(), 5);

        assert!(parse_bbox("30.0,-2.0,30.1").is_err());
        assert!(parse_bbox("30.1,-2.0,30.0,-1.9").is_err());
        assert!(parse_bbox("a,b,c,d").is_err());
        assert!(parse_bbox("200,0,201,1").is_err());
    }
}
