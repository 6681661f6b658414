use serde_json::Value;

use engine::collection::FeatureCollection;
use engine::feature::{Feature, FeatureId};
use foundation::LonLat;

#[derive(Debug)]
pub enum CountryDataError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for CountryDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountryDataError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            CountryDataError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for CountryDataError {}

/// Parses the country-shapes dataset into a `FeatureCollection`.
///
/// Each feature carries `properties.name`, `properties.centroid` and an
/// optional `properties.flows` object whose keys are stringified indices
/// into this same collection. Key order is preserved, so arc recomputation
/// follows the dataset's flow order.
pub fn countries_from_geojson_str(payload: &str) -> Result<FeatureCollection, CountryDataError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| CountryDataError::InvalidFeature {
            index: 0,
            reason: format!("JSON parse error: {e}"),
        })?;
    countries_from_geojson_value(value)
}

pub fn countries_from_geojson_value(value: Value) -> Result<FeatureCollection, CountryDataError> {
    let obj = value
        .as_object()
        .ok_or(CountryDataError::NotAFeatureCollection)?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(CountryDataError::NotAFeatureCollection)?;
    if ty != "FeatureCollection" {
        return Err(CountryDataError::NotAFeatureCollection);
    }

    let features_val = obj
        .get("features")
        .and_then(|v| v.as_array())
        .ok_or(CountryDataError::NotAFeatureCollection)?;

    let mut collection = FeatureCollection::new();
    for (index, feat_val) in features_val.iter().enumerate() {
        let feature = parse_feature(feat_val)
            .map_err(|reason| CountryDataError::InvalidFeature { index, reason })?;
        collection.push(feature);
    }

    Ok(collection)
}

fn parse_feature(value: &Value) -> Result<Feature, String> {
    let obj = value
        .as_object()
        .ok_or("feature must be an object".to_string())?;

    let feat_type = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("feature missing type".to_string())?;
    if feat_type != "Feature" {
        return Err(format!("unexpected feature type: {feat_type}"));
    }

    let props = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .ok_or("feature missing properties".to_string())?;

    let name = props
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or("properties missing name".to_string())?
        .to_string();

    let centroid = parse_centroid(
        props
            .get("centroid")
            .ok_or("properties missing centroid".to_string())?,
    )?;

    let mut feature = Feature::new(name, centroid);
    feature.abbrev = props
        .get("abbrev")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    feature.kind = props
        .get("type")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    feature.flows = match props.get("flows") {
        Some(flows) => parse_flows(flows)?,
        None => Vec::new(),
    };

    Ok(feature)
}

fn parse_centroid(value: &Value) -> Result<LonLat, String> {
    let arr = value
        .as_array()
        .ok_or("centroid must be a [lon, lat] array".to_string())?;
    if arr.len() < 2 {
        return Err("centroid must have [lon, lat]".to_string());
    }
    let lon = arr[0]
        .as_f64()
        .ok_or("centroid lon must be a number".to_string())?;
    let lat = arr[1]
        .as_f64()
        .ok_or("centroid lat must be a number".to_string())?;
    Ok(LonLat::new(lon, lat))
}

fn parse_flows(value: &Value) -> Result<Vec<(FeatureId, f64)>, String> {
    let obj = value
        .as_object()
        .ok_or("flows must be an object".to_string())?;
    let mut out = Vec::with_capacity(obj.len());
    for (key, v) in obj {
        let to: u32 = key
            .parse()
            .map_err(|_| format!("flow key is not a feature index: {key}"))?;
        let amount = v
            .as_f64()
            .ok_or_else(|| format!("flow value for key {key} must be a number"))?;
        out.push((FeatureId(to), amount));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{CountryDataError, countries_from_geojson_str};
    use engine::feature::FeatureId;

    const COUNTRIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "name": "USA",
                    "abbrev": "U.S.A.",
                    "centroid": [-98.0, 38.0],
                    "flows": {"2": 5.0, "1": -3.0}
                },
                "geometry": {"type": "Polygon", "coordinates": []}
            },
            {
                "type": "Feature",
                "properties": {
                    "name": "France",
                    "centroid": [2.0, 47.0]
                },
                "geometry": {"type": "Polygon", "coordinates": []}
            },
            {
                "type": "Feature",
                "properties": {
                    "name": "Kenya",
                    "centroid": [38.0, 0.5]
                },
                "geometry": {"type": "Polygon", "coordinates": []}
            }
        ]
    }"#;

    #[test]
    fn parses_features_with_flows() {
        let data = countries_from_geojson_str(COUNTRIES).expect("parse countries");
        assert_eq!(data.len(), 3);

        let usa = data.get(FeatureId(0)).expect("USA");
        assert_eq!(usa.name, "USA");
        assert_eq!(usa.abbrev.as_deref(), Some("U.S.A."));
        assert_eq!(usa.centroid.to_array(), [-98.0, 38.0]);

        let france = data.get(FeatureId(1)).expect("France");
        assert!(france.flows.is_empty());
    }

    #[test]
    fn flow_key_order_is_preserved() {
        // Keys arrive as "2" then "1"; recomputation depends on that order
        // surviving the parse.
        let data = countries_from_geojson_str(COUNTRIES).expect("parse countries");
        let usa = data.get(FeatureId(0)).expect("USA");
        assert_eq!(
            usa.flows,
            vec![(FeatureId(2), 5.0), (FeatureId(1), -3.0)]
        );
    }

    #[test]
    fn rejects_non_feature_collections() {
        let err = countries_from_geojson_str(r#"{"type": "Feature"}"#).expect_err("reject");
        assert!(matches!(err, CountryDataError::NotAFeatureCollection));
    }

    #[test]
    fn reports_malformed_features_with_index() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "A", "centroid": [0.0, 0.0]}},
                {"type": "Feature", "properties": {"name": "B"}}
            ]
        }"#;
        let err = countries_from_geojson_str(payload).expect_err("missing centroid");
        match err {
            CountryDataError::InvalidFeature { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("centroid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_flow_keys() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {
                        "name": "A",
                        "centroid": [0.0, 0.0],
                        "flows": {"not-an-index": 1.0}
                    }
                }
            ]
        }"#;
        let err = countries_from_geojson_str(payload).expect_err("bad key");
        match err {
            CountryDataError::InvalidFeature { reason, .. } => {
                assert!(reason.contains("not-an-index"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
